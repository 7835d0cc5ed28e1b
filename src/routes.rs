use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let static_dir = PathBuf::from(&state.config.static_dir);

    Router::new()
        // REST API
        .route("/api/health", get(handlers::health_check))
        .route("/api/translate", post(handlers::translate))
        // Frontend page and assets
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
}
