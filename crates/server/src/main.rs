mod app;
mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use crate::{
    app::{AppState, build_router},
    config::ServerConfig,
    utils::shutdown::shutdown_signal,
};
use database::{DatabaseConfig, db::create_connection};
use env_logger::Env;
use log::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let db_config = DatabaseConfig::from_env().expect("Invalid database configuration");
    let server_config = ServerConfig::from_env().expect("Invalid server configuration");

    let db = create_connection(&db_config)
        .await
        .expect("Failed to connect to the database");

    let app = build_router(AppState { db });

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{address} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
