//! InferenceBackend trait definition.
//!
//! This is the port the relay forwards through; concrete HTTP clients live
//! in relaychat-infra. Uses RPITIT for `generate`, with an object-safe
//! `InferenceBackendDyn` + [`BoxBackend`] pair for runtime backend selection.

use std::future::Future;
use std::pin::Pin;

use relaychat_types::error::UpstreamError;

/// Trait for upstream inference backends (gradio space, OpenAI API, fakes).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Since RPITIT
/// traits cannot be used as trait objects directly, [`BoxBackend`] provides
/// the dynamic-dispatch wrapper.
pub trait InferenceBackend: Send + Sync {
    /// Human-readable backend name (e.g., "gradio", "openai").
    fn name(&self) -> &str;

    /// Forward one prompt upstream and return the reply text.
    ///
    /// An empty reply is a valid success; substituting fallback text for it
    /// is the relay service's job, not the backend's.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}

/// Object-safe version of [`InferenceBackend`] with a boxed future.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation is
/// provided for all types implementing `InferenceBackend`.
pub trait InferenceBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, UpstreamError>> + Send + 'a>>;
}

impl<T: InferenceBackend> InferenceBackendDyn for T {
    fn name(&self) -> &str {
        InferenceBackend::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, UpstreamError>> + Send + 'a>> {
        Box::pin(self.generate(prompt))
    }
}

/// Type-erased inference backend for runtime selection.
///
/// Wraps any `InferenceBackend` behind dynamic dispatch so the serve path
/// can pick gradio vs openai from configuration, and tests can substitute
/// fakes. `BoxBackend` itself implements `InferenceBackend`, so it slots
/// into [`crate::relay::RelayService`] unchanged.
pub struct BoxBackend {
    inner: Box<dyn InferenceBackendDyn + Send + Sync>,
}

impl BoxBackend {
    /// Wrap a concrete backend in a type-erased box.
    pub fn new<T: InferenceBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }
}

impl InferenceBackend for BoxBackend {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.inner.generate_boxed(prompt).await
    }
}
