//! Postbox CLI and RPC server entry point.
//!
//! Binary name: `postbox`
//!
//! Parses CLI arguments, loads configuration, wires the store-backed
//! services, then dispatches to the selected command.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,postbox=info",
        1 => "info,postbox=debug",
        _ => "trace",
    };
    postbox_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions need neither config nor a store connection
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "postbox", &mut std::io::stdout());
        return Ok(());
    }

    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    let config = postbox_infra::config::load_config(&config_dir).await;

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState::init(&config).await?;

            let host = host.unwrap_or_else(|| config.http.host.clone());
            let port = port.unwrap_or(config.http.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "postbox listening");

            let router = http::router::build_router(state);
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::InitStore => {
            let state = AppState::init(&config).await?;
            postbox_infra::mongo::index::ensure_text_index(&state.store).await?;
            println!("text index ready on the \"messages\" collection");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    postbox_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

/// Default config directory: `~/.postbox`.
fn default_config_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".postbox")
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
