//! Concierge CLI entry point.
//!
//! Binary name: `concierge`
//!
//! Parses CLI arguments, loads configuration and the session store, then
//! dispatches to the requested command. Without a subcommand the
//! interactive chat starts.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG wins when set
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,concierge=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Neither of these needs app state
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "concierge", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Render { file }) => {
            return cli::render::render_markdown(file.as_deref()).await;
        }
        _ => {}
    }

    let state = AppState::init(cli.config.as_deref(), cli.ephemeral).await?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&state).await?,
        Commands::Session => cli::session::show_session(&state, cli.json).await?,
        Commands::Render { .. } | Commands::Completions { .. } => {}
    }

    Ok(())
}
