//! Foresight CLI entry point.
//!
//! Binary name: `fsight`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then
//! dispatches to the interactive wizard or one of the helper commands.

mod cli;
mod state;

use anyhow::anyhow;
use clap::Parser;
use clap_complete::generate;

use foresight_observe::tracing_setup::{init_tracing, shutdown_tracing, Verbosity};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(Verbosity::from_flags(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "fsight", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await;

    let result = match cli.command {
        Commands::Run { file } => cli::wizard::run_wizard(&state, file, cli.json).await,
        Commands::Render { file, answers } => {
            cli::render::render(&state, &file, answers.as_deref(), cli.json).await
        }
        Commands::Steps => cli::steps::list_steps(&state, cli.json),
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
