//! OpenAiBackend -- [`InferenceBackend`] for an OpenAI-style chat API.
//!
//! Sends a two-message conversation (configured system prompt + the user
//! message) to `{base_url}/v1/chat/completions` with bearer auth and returns
//! `choices[0].message.content`.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use relaychat_core::backend::InferenceBackend;
use relaychat_types::config::UpstreamConfig;
use relaychat_types::error::UpstreamError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenAI-style chat completions backend.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    system_prompt: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatCompletionMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiBackend {
    pub fn new(upstream: &UpstreamConfig, api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: upstream.endpoint.clone(),
            model: upstream.model.clone(),
            system_prompt: upstream.system_prompt.clone(),
        }
    }

    /// Override the base URL (useful for pointing tests at a fake endpoint).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// OpenAiBackend intentionally does NOT derive Debug. The SecretString field
// already refuses to print the key, but omitting Debug entirely keeps the
// whole request state out of logs.

impl InferenceBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatCompletionMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatCompletionMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        let url = self.url("/v1/chat/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed(format!("failed to parse response: {e}")))?;

        tracing::debug!(model = %self.model, "chat completion returned");
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
