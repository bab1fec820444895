//! CLI command definitions for the `rchat` binary.
//!
//! Uses clap derive macros for argument parsing. Two commands: `serve`
//! starts the relay server, `send` runs the chat widget flow headlessly
//! against a running relay.

pub mod send;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Single-turn chat relay with a typing-reveal client.
#[derive(Parser)]
#[command(name = "rchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file.
    #[arg(long, global = true, default_value = "relaychat.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay server.
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file).
        #[arg(long)]
        host: Option<String>,
    },

    /// Send one message to a running relay and reveal the reply.
    Send {
        /// The message to send.
        message: String,

        /// Relay server to talk to.
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,

        /// Milliseconds between typing reveal frames.
        #[arg(long, default_value = "20")]
        interval_ms: u64,
    },
}
