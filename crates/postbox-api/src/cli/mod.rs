//! CLI command definitions for the `postbox` binary.
//!
//! Uses clap derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Record service for message threads and users.
#[derive(Parser)]
#[command(name = "postbox", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Bridge tracing spans to an OpenTelemetry stdout exporter.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Directory holding config.toml (defaults to ~/.postbox).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the RPC server.
    Serve {
        /// Listen host (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides config).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the store indexes that full-text search depends on.
    #[command(name = "init-store")]
    InitStore,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
