//! CLI command definitions for the `concierge` binary.
//!
//! Uses clap derive macros for argument parsing. Running without a
//! subcommand starts the interactive chat.

pub mod chat;
pub mod render;
pub mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with the real estate assistant from your terminal.
#[derive(Parser)]
#[command(name = "concierge", version, about, long_about = None)]
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

    /// Config file to use instead of `{data_dir}/config.toml`.
    #[arg(long, global = true, env = "CONCIERGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep the session id in memory only; a new one is created every run.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat (the default).
    Chat,

    /// Show the session id sent with every request.
    Session,

    /// Render assistant Markdown to HTML (reads stdin when no file is given).
    Render {
        /// Markdown file to render.
        file: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
