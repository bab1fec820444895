//! Relaychat CLI and relay server entry point.
//!
//! Binary name: `rchat`
//!
//! Parses CLI arguments, loads configuration, then either starts the relay
//! server (`rchat serve`) or runs the one-shot chat flow (`rchat send`).

mod cli;
mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,relaychat=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = relaychat_infra::config::load_relay_config(&cli.config).await;

    match cli.command {
        Commands::Serve { port, host } => {
            // CLI flags override config file values
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            let state = AppState::init(config).await?;

            let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Relaychat listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {} forwarding to {} ({})",
                console::style("↪").dim(),
                console::style(&state.config.upstream.endpoint).cyan(),
                state.config.upstream.backend
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Send {
            message,
            server,
            interval_ms,
        } => {
            cli::send::send_message(&server, &message, interval_ms, cli.json).await?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
