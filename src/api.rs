//! Admin REST surface over a [`MemoryStore`]: tournament registration plus the two bracket
//! operations. Mounted by the `web` binary through [`configure`].

use crate::config::Config;
use crate::logic::{
    bracket_rounds, champion, generate_bracket, submit_match_result, RandomDraw, Round,
};
use crate::models::{
    BracketError, MatchId, MatchResult, ParticipantId, Tournament, TournamentId,
};
use crate::store::MemoryStore;
use actix_web::{
    get, post,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};

type Store = Data<MemoryStore>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    max_teams: u32,
}

#[derive(Deserialize)]
struct RegisterParticipantBody {
    name: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and participant id.
#[derive(Deserialize)]
struct ParticipantPath {
    id: TournamentId,
    participant_id: ParticipantId,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct MatchPath {
    id: TournamentId,
    match_id: MatchId,
}

/// Tournament plus its bracket grouped by round.
#[derive(Serialize)]
struct BracketResponse {
    tournament: Tournament,
    rounds: Vec<Round>,
    champion: Option<ParticipantId>,
}

/// Map an engine error to a JSON response with a matching status code.
pub fn error_response(err: &BracketError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        BracketError::NotFound(_) => HttpResponse::NotFound().json(body),
        BracketError::AlreadyGenerated | BracketError::AlreadyFinished => {
            HttpResponse::Conflict().json(body)
        }
        BracketError::Store(e) => {
            log::error!("Storage failure: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": "Storage error" }))
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn bracket_response(store: &MemoryStore, id: TournamentId) -> Result<BracketResponse, BracketError> {
    let tournament = store
        .tournament(id)?
        .ok_or_else(|| BracketError::tournament_not_found(id))?;
    let matches = store.matches(id)?;
    Ok(BracketResponse {
        tournament,
        rounds: bracket_rounds(&matches),
        champion: champion(&matches),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "knockout-bracket",
    })
}

/// Create a tournament (capacity is only validated when the bracket is generated).
#[post("/api/tournaments")]
async fn api_create_tournament(store: Store, body: Json<CreateTournamentBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    match store.create_tournament(name, body.max_teams) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&BracketError::from(e)),
    }
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(store: Store, path: Path<TournamentPath>) -> HttpResponse {
    match store.tournament(path.id) {
        Ok(Some(t)) => HttpResponse::Ok().json(t),
        Ok(None) => error_response(&BracketError::tournament_not_found(path.id)),
        Err(e) => error_response(&BracketError::from(e)),
    }
}

#[get("/api/tournaments/{id}/participants")]
async fn api_list_participants(store: Store, path: Path<TournamentPath>) -> HttpResponse {
    match store.participants(path.id) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => error_response(&BracketError::from(e)),
    }
}

/// Register a team (pending until confirmed).
#[post("/api/tournaments/{id}/participants")]
async fn api_register_participant(
    store: Store,
    path: Path<TournamentPath>,
    body: Json<RegisterParticipantBody>,
) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    match store.register_participant(path.id, name) {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(&e),
    }
}

#[post("/api/tournaments/{id}/participants/{participant_id}/confirm")]
async fn api_confirm_participant(store: Store, path: Path<ParticipantPath>) -> HttpResponse {
    match store.confirm_participant(path.id, path.participant_id) {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(&e),
    }
}

/// Generate the bracket with a random draw, then return it.
#[post("/api/tournaments/{id}/bracket")]
async fn api_generate_bracket(
    store: Store,
    config: Data<Config>,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let mut draw = RandomDraw(rand::thread_rng());
    let result = generate_bracket(
        store.get_ref(),
        path.id,
        &mut draw,
        config.generate_options(),
    )
    .and_then(|()| bracket_response(store.get_ref(), path.id));
    match result {
        Ok(bracket) => HttpResponse::Ok().json(bracket),
        Err(e) => {
            log::warn!("Bracket generation rejected for {}: {}", path.id, e);
            error_response(&e)
        }
    }
}

#[get("/api/tournaments/{id}/bracket")]
async fn api_get_bracket(store: Store, path: Path<TournamentPath>) -> HttpResponse {
    match bracket_response(store.get_ref(), path.id) {
        Ok(bracket) => HttpResponse::Ok().json(bracket),
        Err(e) => error_response(&e),
    }
}

/// Submit a match result; the winner advances into the next round.
#[post("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_submit_result(
    store: Store,
    path: Path<MatchPath>,
    body: Json<MatchResult>,
) -> HttpResponse {
    let result = submit_match_result(store.get_ref(), path.id, path.match_id, body.into_inner())
        .and_then(|()| bracket_response(store.get_ref(), path.id));
    match result {
        Ok(bracket) => HttpResponse::Ok().json(bracket),
        Err(e) => {
            log::warn!("Result for match {} rejected: {}", path.match_id, e);
            error_response(&e)
        }
    }
}

/// Register every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_list_participants)
        .service(api_register_participant)
        .service(api_confirm_participant)
        .service(api_generate_bracket)
        .service(api_get_bracket)
        .service(api_submit_result);
}
