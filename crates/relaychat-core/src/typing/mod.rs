//! Typing reveal: tag-atomic tokenization and the timed reveal task.

pub mod animator;
pub mod token;

pub use animator::{AnimationHandle, Animator, DisplaySink};
pub use token::tokenize;
