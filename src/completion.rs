use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;

use crate::error::{AppError, Result};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-3.5-turbo";

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

/// Produces a reply for a user message given an assembled system prompt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, message: &str) -> Result<String>;
}

pub struct OpenAiClient {
    api_key: String,
    http: Client,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system_prompt: &str, message: &str) -> Result<String> {
        let body = ChatCompletionRequest {
            model: MODEL.into(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system_prompt.into(),
                },
                Message {
                    role: "user".into(),
                    content: message.into(),
                },
            ],
        };

        let res = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::CompletionError(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let detail = res.text().await.unwrap_or_default();
            return Err(AppError::CompletionError(format!(
                "completion API returned {}: {}",
                status, detail
            )));
        }

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::CompletionError(e.to_string()))?;

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AppError::CompletionError("Invalid response format from completion API".to_string())
            })?;

        Ok(reply.trim().to_string())
    }
}
