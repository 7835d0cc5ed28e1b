use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use medbridge_backend::config::Settings;
use medbridge_backend::routes;
use medbridge_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("medbridge_backend=debug,tower_http=debug")
        .init();

    let config = Settings::from_env();
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; translate requests will fail until configured");
    }

    let app_state = AppState::new(config);

    let app = Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state.clone());

    let addr = format!("{}:{}", app_state.config.host, app_state.config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
