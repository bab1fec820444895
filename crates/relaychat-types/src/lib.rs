//! Shared domain types for Relaychat.
//!
//! This crate contains the types used across the relay: chat wire types,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
