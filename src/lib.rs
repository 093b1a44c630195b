pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod infra;

use config::ServerConfig;
use error::AppError;
use http::AppState;
use infra::init_db;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Open the database, bind the listener and serve until the process stops.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let db_path = config.database_path();
    log::info!("DB path: {:?}", db_path);

    let db = init_db(&db_path).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;
    let state = AppState::new(Arc::new(db));
    let app = http::router(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("bind {}: {}", addr, e)))?;
    log::info!("Tour Agency listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}
