//! Admin web server for the bracket engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set BRACKET_STRICT_CAPACITY=true to reject tournaments with too many confirmed teams.

use actix_web::{web::Data, App, HttpServer};
use knockout_bracket::{api, Config, MemoryStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    log::info!(
        "Starting server at http://{}:{} (strict capacity: {})",
        config.host,
        config.port,
        config.strict_capacity
    );

    let bind = (config.host.clone(), config.port);
    let store = Data::new(MemoryStore::new());
    let config = Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(config.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
