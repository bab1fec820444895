//! Infrastructure layer for Relaychat.
//!
//! Concrete implementations of the core ports: reqwest-backed upstream
//! inference backends and the TOML config loader.

pub mod config;
pub mod upstream;
