//! CLI command definitions and dispatch for the `fsight` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod render;
pub mod steps;
pub mod wizard;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build a complete predictive-analysis prompt, step by step.
#[derive(Parser)]
#[command(name = "fsight", version, about, long_about = None)]
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

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the interactive wizard.
    #[command(alias = "wizard")]
    Run {
        /// Historical data file (.csv, .tsv or .xlsx). Asked for when omitted.
        file: Option<PathBuf>,
    },

    /// Render a prompt without interaction, answering from a file.
    Render {
        /// Historical data file (.csv, .tsv or .xlsx).
        file: PathBuf,

        /// Answers file (.json or .toml) mapping field keys to values.
        /// Omitted keys take the wizard's defaults.
        #[arg(short, long)]
        answers: Option<PathBuf>,
    },

    /// List the wizard's steps and the fields each one asks for.
    Steps,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
