//! Cancellable typing reveal task.
//!
//! The reveal runs as a tokio task ticking on a fixed interval; each tick
//! extends the sink's content by one token from [`tokenize`]. Starting a new
//! animation through the same [`Animator`] cancels the previous task first,
//! so two reveals never race on one sink. Cancellation is cooperative via
//! a [`CancellationToken`] checked between ticks.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::format::SafeMarkup;
use crate::typing::token::tokenize;

/// Where revealed markup goes.
///
/// The animator only ever *grows* the content: each `set_content` call
/// receives a strict prefix-extension of the previous one, so sinks may
/// diff against what they already rendered.
pub trait DisplaySink: Send + Sync {
    /// Replace the sink's content with the markup revealed so far.
    fn set_content(&self, markup: &str);

    /// Keep the latest content in view. Called after every reveal frame.
    fn scroll_to_latest(&self);
}

/// Handle to a running (or finished) reveal task.
pub struct AnimationHandle {
    cancellation: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl AnimationHandle {
    /// Stop the reveal. The sink keeps whatever was revealed so far.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the reveal task to exit (complete or cancelled).
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Drives typing reveals onto a sink, one animation at a time.
pub struct Animator {
    interval: Duration,
    current: Option<CancellationToken>,
}

impl Animator {
    /// `interval` is the delay between reveal frames. Cosmetic only.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            current: None,
        }
    }

    /// Start revealing `markup` into `sink`.
    ///
    /// If a previous animation started through this animator is still
    /// running, it is cancelled before the new task spawns.
    pub fn start(&mut self, sink: Arc<dyn DisplaySink>, markup: SafeMarkup) -> AnimationHandle {
        if let Some(prev) = self.current.take() {
            prev.cancel();
        }

        let cancellation = CancellationToken::new();
        self.current = Some(cancellation.clone());

        let interval = self.interval;
        let task_token = cancellation.clone();
        let task = tokio::spawn(async move {
            let markup = markup.into_inner();
            let tokens = tokenize(&markup);
            let total = tokens.len();

            let mut ticker = tokio::time::interval(interval);
            let mut revealed = String::with_capacity(markup.len());

            for token in tokens {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        tracing::debug!(
                            revealed = revealed.len(),
                            total = markup.len(),
                            "typing reveal cancelled"
                        );
                        return;
                    }
                    _ = ticker.tick() => {}
                }

                revealed.push_str(token);
                sink.set_content(&revealed);
                sink.scroll_to_latest();
            }

            tracing::trace!(tokens = total, "typing reveal complete");
        });

        AnimationHandle { cancellation, task }
    }
}
