//! HTTP surface: registration, generation and result submission through the admin routes.

use actix_web::{http::StatusCode, test, web::Data, App};
use knockout_bracket::{api, Config, MemoryStore};
use serde_json::{json, Value};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(Data::new(MemoryStore::new()))
                .app_data(Data::new(Config::default()))
                .configure(api::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], json!(true));
}

#[actix_web::test]
async fn two_team_cup_over_http() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({ "name": "Lunchtime Cup", "max_teams": 2 }))
        .to_request();
    let tournament: Value = test::call_and_read_body_json(&app, req).await;
    let tid = tournament["id"].as_str().unwrap().to_string();
    assert_eq!(tournament["bracket_status"], json!("not_generated"));

    for name in ["Harriers", "Wanderers"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/tournaments/{tid}/participants"))
            .set_json(json!({ "name": name }))
            .to_request();
        let p: Value = test::call_and_read_body_json(&app, req).await;
        let pid = p["id"].as_str().unwrap();
        let req = test::TestRequest::post()
            .uri(&format!("/api/tournaments/{tid}/participants/{pid}/confirm"))
            .to_request();
        let p: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(p["status"], json!("confirmed"));
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{tid}/bracket"))
        .to_request();
    let bracket: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bracket["tournament"]["bracket_status"], json!("generated"));
    let final_match = &bracket["rounds"][0]["matches"][0];
    assert_eq!(bracket["rounds"][0]["name"], json!("Final"));
    let match_id = final_match["id"].as_str().unwrap().to_string();
    let team_a = final_match["team_a"].clone();

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{tid}/bracket"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{tid}/matches/{match_id}/result"))
        .set_json(json!({ "score_a": 1, "score_b": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{tid}/matches/{match_id}/result"))
        .set_json(json!({ "score_a": 1, "score_b": 1, "tie_break_a": 5, "tie_break_b": 3 }))
        .to_request();
    let bracket: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bracket["champion"], team_a);
    assert_eq!(bracket["rounds"][0]["matches"][0]["status"], json!("finished"));

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{tid}/matches/{match_id}/result"))
        .set_json(json!({ "score_a": 0, "score_b": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn rejections_map_to_status_codes() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/tournaments/7f1c4f4e-8f4b-4a53-9d2c-1b2d3e4f5a6b/bracket")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({ "name": "Six-team Trophy", "max_teams": 6 }))
        .to_request();
    let tournament: Value = test::call_and_read_body_json(&app, req).await;
    let tid = tournament["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{tid}/bracket"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Unsupported bracket size 6"));

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({ "name": "  ", "max_teams": 4 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
