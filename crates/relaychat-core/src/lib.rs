//! Business logic for Relaychat.
//!
//! This crate defines the "port" (the [`backend::InferenceBackend`] trait)
//! that the infrastructure layer implements, plus the two client-side cores:
//! the response formatter and the typing reveal. It depends only on
//! `relaychat-types` -- never on `relaychat-infra` or any HTTP crate.

pub mod backend;
pub mod format;
pub mod relay;
pub mod typing;
