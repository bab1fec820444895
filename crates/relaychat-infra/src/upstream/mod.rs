//! Concrete upstream inference backends.
//!
//! Each backend implements [`relaychat_core::backend::InferenceBackend`]
//! over a raw reqwest client. Runtime selection between them happens in the
//! binary's state wiring via [`relaychat_core::backend::BoxBackend`].

pub mod gradio;
pub mod openai;

pub use gradio::GradioBackend;
pub use openai::OpenAiBackend;
