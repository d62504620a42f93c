//! CLI command definitions for the `asislegal` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod status;

use clap::{Parser, Subcommand};

/// Chat with your legal documents.
#[derive(Parser)]
#[command(name = "asislegal", version, about, long_about = None)]
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

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value_t = 8080, env = "ASISLEGAL_PORT")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1", env = "ASISLEGAL_HOST")]
        host: String,
    },

    /// Show a status dashboard (row counts, data directory).
    Status,
}
