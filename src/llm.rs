//! Remote model client.
//!
//! [`CompletionClient`] is the seam the HTTP layer talks to; [`GroqClient`]
//! is the production implementation over Groq's OpenAI-compatible
//! `chat/completions` endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::{ApiKey, AppConfig};

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("failed to send completion request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Groq API error ({status}): {message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed completion response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("completion response did not contain an answer")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

/// Turns a prompt into generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct GroqClient {
    http: reqwest::Client,
    api_key: ApiKey,
    model: String,
    endpoint: String,
}

impl GroqClient {
    pub fn new(api_key: ApiKey, model: impl Into<String>, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(cfg.api_key.clone(), cfg.model.clone(), &cfg.base_url)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, model = %self.model, "completion request rejected");
            return Err(LlmError::Status {
                status,
                message: error_message(&body),
            });
        }

        extract_answer(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Pulls `choices[0].message.content` out of a chat completion body, verbatim.
fn extract_answer(body: &str) -> Result<String, LlmError> {
    let parsed: ChatResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyResponse)
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "<empty response body>".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"  4\n"}}]}"#;
        assert_eq!(extract_answer(body).unwrap(), "  4\n");
    }

    #[test]
    fn missing_choices_is_empty_response() {
        assert!(matches!(
            extract_answer(r#"{"choices":[]}"#),
            Err(LlmError::EmptyResponse)
        ));
        assert!(matches!(
            extract_answer(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#),
            Err(LlmError::EmptyResponse)
        ));
    }

    #[test]
    fn garbage_is_parse_error() {
        assert!(matches!(extract_answer("<html>"), Err(LlmError::Parse(_))));
    }

    #[test]
    fn provider_error_message_is_preferred() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        assert_eq!(error_message(body), "Invalid API Key");
        assert_eq!(error_message("bad gateway\n"), "bad gateway");
        assert_eq!(error_message(""), "<empty response body>");
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = GroqClient::new(ApiKey::new("k"), "m", "http://localhost:9/v1/");
        assert_eq!(client.endpoint, "http://localhost:9/v1/chat/completions");
        assert_eq!(client.model(), "m");
    }

    #[test]
    fn other_error_displays_verbatim() {
        assert_eq!(
            LlmError::Other("rate limit exceeded".into()).to_string(),
            "rate limit exceeded"
        );
    }
}
