//! GradioBackend -- [`InferenceBackend`] for a gradio-hosted chat space.
//!
//! Sends the prompt to `{base_url}/run/predict` with the space's fixed
//! generation parameters and pulls the reply out of the array-shaped result
//! at index `[0][1]`. The space wraps an ongoing conversation, but the relay
//! always sends `chat_counter: 0` and an empty `chatbot` history, so every
//! call is a fresh single turn.

use relaychat_core::backend::InferenceBackend;
use relaychat_types::config::{GenerationParams, UpstreamConfig};
use relaychat_types::error::UpstreamError;
use serde::Serialize;

/// Gradio space inference backend.
pub struct GradioBackend {
    client: reqwest::Client,
    base_url: String,
    generation: GenerationParams,
}

/// Request body for the space's `/run/predict` endpoint.
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
    top_p: f64,
    temperature: f64,
    chat_counter: u32,
    chatbot: Vec<serde_json::Value>,
}

impl GradioBackend {
    pub fn new(upstream: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: upstream.endpoint.clone(),
            generation: upstream.generation,
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

/// Pull the reply text out of the space's array-shaped result.
///
/// The result nests the latest exchange at `[0]` as `[user, bot]`; a
/// missing or non-string value yields an empty reply, which the relay
/// service replaces with its fallback text.
fn extract_reply(result: &serde_json::Value) -> String {
    result
        .get(0)
        .and_then(|exchange| exchange.get(1))
        .and_then(|reply| reply.as_str())
        .unwrap_or_default()
        .to_string()
}

impl InferenceBackend for GradioBackend {
    fn name(&self) -> &str {
        "gradio"
    }

    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let body = PredictRequest {
            inputs: prompt,
            top_p: self.generation.top_p,
            temperature: self.generation.temperature,
            chat_counter: self.generation.chat_counter,
            chatbot: Vec::new(),
        };
        let url = self.url("/run/predict");

        let response = self
            .client
            .post(&url)
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

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed(format!("failed to parse response: {e}")))?;

        tracing::debug!(%url, "gradio predict returned");
        Ok(extract_reply(&result))
    }
}
