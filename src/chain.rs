use std::sync::Arc;

use crate::llm::{CompletionClient, LlmError};
use crate::prompt::render_prompt;

/// Prompt template piped into a completion client. Built once at startup
/// and shared read-only across requests.
#[derive(Clone)]
pub struct AnswerChain {
    client: Arc<dyn CompletionClient>,
}

impl AnswerChain {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn invoke(&self, question: &str) -> Result<String, LlmError> {
        let prompt = render_prompt(question);
        self.client.complete(&prompt).await
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionClient for Recorder {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(prompt.to_string());
            Ok("ok".to_string())
        }

        fn model(&self) -> &str {
            "recorder"
        }
    }

    #[tokio::test]
    async fn sends_rendered_prompt() {
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
        });
        let chain = AnswerChain::new(recorder.clone());

        assert_eq!(chain.invoke("Why is the sky blue?").await.unwrap(), "ok");
        assert_eq!(chain.model(), "recorder");
        assert_eq!(
            *recorder.seen.lock().unwrap(),
            vec![render_prompt("Why is the sky blue?")]
        );
    }
}
