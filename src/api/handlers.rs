use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::AppState;

use super::models::{AskRequest, AskResponse, ErrorResponse, WelcomeResponse};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Groq LLM API. Use the /ask endpoint to ask questions.";

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    if request.question.trim().is_empty() {
        return Err(ApiError::Validation(
            "Field \"question\" must be a non-empty string".to_string(),
        ));
    }

    let answer = state.chain.invoke(&request.question).await.map_err(|err| {
        tracing::error!(error = %err, model = state.chain.model(), "failed to answer question");
        ApiError::from(err)
    })?;

    Ok(Json(AskResponse { answer }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
        .into_response()
}
