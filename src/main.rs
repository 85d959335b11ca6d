use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripplanner::config::PlannerConfig;
use tripplanner::gemini::GeminiClient;
use tripplanner::{AppState, web};

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast on a missing or invalid API key, before anything else runs.
    let config = PlannerConfig::load()?;
    init_tracing(&config.logging.level, &config.logging.format);

    let generator = GeminiClient::new(&config.gemini)?;
    let state = AppState::new(Arc::new(generator));

    web::run(&config.server, state).await
}
