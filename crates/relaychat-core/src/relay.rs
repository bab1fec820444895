//! Relay service: forward one user message upstream, return one reply.
//!
//! Generic over [`InferenceBackend`] to keep the clean-architecture split
//! (relaychat-core never depends on relaychat-infra). Transport and parse
//! failures propagate as [`UpstreamError`] for the HTTP layer to convert;
//! a *successful* call that produced no text is papered over with a fixed
//! fallback reply instead, so the client always has something to display.

use tracing::{debug, info};

use relaychat_types::error::UpstreamError;

use crate::backend::InferenceBackend;

/// Substituted when the upstream succeeds but returns no usable reply text.
pub const EMPTY_REPLY_FALLBACK: &str = "No reply from AI.";

/// Stateless single-turn relay over an inference backend.
pub struct RelayService<B: InferenceBackend> {
    backend: B,
}

impl<B: InferenceBackend> RelayService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Forward `message` upstream and return the reply text.
    ///
    /// A missing or whitespace-only reply becomes [`EMPTY_REPLY_FALLBACK`];
    /// backend errors propagate untouched.
    pub async fn relay(&self, message: &str) -> Result<String, UpstreamError> {
        debug!(backend = self.backend.name(), chars = message.len(), "forwarding message");

        let reply = self.backend.generate(message).await?;

        if reply.trim().is_empty() {
            info!(backend = self.backend.name(), "upstream returned empty reply, using fallback");
            return Ok(EMPTY_REPLY_FALLBACK.to_string());
        }

        Ok(reply)
    }
}
