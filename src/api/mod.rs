mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{ask, not_found, root, WELCOME_MESSAGE};
pub use models::{AskRequest, AskResponse, ErrorResponse, WelcomeResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ask", post(ask))
        .fallback(not_found)
        .with_state(state)
}
