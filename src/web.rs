use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};
use crate::config::ServerConfig;

pub fn app(state: AppState, frontend_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(cors)
}

pub async fn run(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = app(state, &config.frontend_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.port);
    axum::serve(listener, app)
        .await
        .context("Web server terminated")?;
    Ok(())
}
