use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Completion collaborator used to refine generated content.
///
/// A failure is fatal for the current request; no retry or fallback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

/// Chat-completion client for the OpenAI-compatible Groq endpoint.
pub struct GroqCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl GroqCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.groq_api_base)
            .with_api_key(config.groq_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.groq_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for GroqCompletionClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        log::info!("sending refinement request to model '{}'", self.model);

        // Fixed sampling parameters; one non-streaming completion.
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": 0.5,
            "max_completion_tokens": 1024,
            "top_p": 1.0,
            "stop": Value::Null,
            "stream": false,
        });

        let response: ChatCompletionResponse = self.client.chat().create_byot(body).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Completion("completion returned no choices".to_string()))?;

        choice
            .message
            .content
            .ok_or_else(|| AppError::Completion("completion returned empty content".to_string()))
    }
}
