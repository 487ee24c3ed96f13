use std::sync::Arc;

use anyhow::Context;
use groq_answer_service::{build_app, run_server, AppConfig, AppState, GroqClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groq_answer_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(model = %config.model, base_url = %config.base_url, "configuration loaded");

    let client = GroqClient::from_config(&config);
    let app = build_app(AppState::new(Arc::new(client)));

    run_server(app, &config.address())
        .await
        .with_context(|| format!("server on {} failed", config.address()))
}
