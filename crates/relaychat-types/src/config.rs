//! Configuration types for the relay.
//!
//! `RelayConfig` represents the top-level `relaychat.toml`. Every field has a
//! default matching the historically observed deployment, so an empty or
//! missing file yields a working relay pointed at the public upstream.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Top-level configuration for the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream inference endpoint settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Which upstream backend implementation to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Gradio-hosted space exposing `/run/predict`.
    Gradio,
    /// OpenAI-style chat completions API.
    OpenAi,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Gradio => write!(f, "gradio"),
            BackendKind::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gradio" => Ok(BackendKind::Gradio),
            "openai" => Ok(BackendKind::OpenAi),
            other => Err(format!("invalid backend kind: '{other}'")),
        }
    }
}

/// Upstream inference endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Backend implementation to use.
    #[serde(default = "default_backend")]
    pub backend: BackendKind,

    /// Base URL of the upstream service.
    ///
    /// For the gradio backend this is the space root (the client appends
    /// `/run/predict`); for the openai backend it is the API root (the
    /// client appends `/v1/chat/completions`).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier (openai backend only).
    #[serde(default = "default_model")]
    pub model: String,

    /// System prompt sent ahead of the user message (openai backend only).
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Generation parameters forwarded verbatim (gradio backend only).
    #[serde(default)]
    pub generation: GenerationParams,
}

fn default_backend() -> BackendKind {
    BackendKind::Gradio
}

fn default_endpoint() -> String {
    "https://yuntian-deng-chatgpt.hf.space".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_system_prompt() -> String {
    "You are a helpful assistant.".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            endpoint: default_endpoint(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            generation: GenerationParams::default(),
        }
    }
}

/// Generation parameters forwarded to the gradio predict endpoint.
///
/// The upstream treats these as opaque sampling knobs; the relay never
/// interprets them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default)]
    pub chat_counter: u32,
}

fn default_top_p() -> f64 {
    1.0
}

fn default_temperature() -> f64 {
    1.0
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            top_p: default_top_p(),
            temperature: default_temperature(),
            chat_counter: 0,
        }
    }
}
