//! Application state wiring config to backend to relay service.
//!
//! The relay service is generic over its backend trait; AppState pins it to
//! [`BoxBackend`] so the concrete upstream is selected at runtime from the
//! loaded configuration.

use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;

use relaychat_core::backend::{BoxBackend, InferenceBackend};
use relaychat_core::relay::RelayService;
use relaychat_infra::upstream::{GradioBackend, OpenAiBackend};
use relaychat_types::config::{BackendKind, RelayConfig};

/// Concrete type alias for the relay service pinned to the boxed backend.
pub type ConcreteRelayService = RelayService<BoxBackend>;

/// Shared application state for the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ConcreteRelayService>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    /// Initialize the application state: pick and wire the upstream backend.
    pub async fn init(config: RelayConfig) -> anyhow::Result<Self> {
        let backend = match config.upstream.backend {
            BackendKind::Gradio => BoxBackend::new(GradioBackend::new(&config.upstream)),
            BackendKind::OpenAi => {
                let api_key = std::env::var("OPENAI_API_KEY")
                    .map(SecretString::from)
                    .context("OPENAI_API_KEY must be set for the openai backend")?;
                BoxBackend::new(OpenAiBackend::new(&config.upstream, api_key))
            }
        };

        tracing::info!(
            backend = backend.name(),
            endpoint = %config.upstream.endpoint,
            "upstream backend ready"
        );

        Ok(Self {
            relay: Arc::new(RelayService::new(backend)),
            config: Arc::new(config),
        })
    }
}
