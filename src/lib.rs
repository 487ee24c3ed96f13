//! HTTP service that answers questions through a hosted language model.
//!
//! `GET /` returns a welcome message; `POST /ask` fills a fixed prompt
//! template with the question, sends it to the model and returns the text.

pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use chain::AnswerChain;
pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use llm::{CompletionClient, GroqClient, LlmError};

#[derive(Clone)]
pub struct AppState {
    pub chain: AnswerChain,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            chain: AnswerChain::new(client),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
