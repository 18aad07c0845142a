//! Command-line interface for `tictactoe`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a computer that blocks and takes wins
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's random choices
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Front-end to run (terminal UI when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front-ends
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full-screen terminal UI
    Tui,

    /// Line-oriented play over stdin/stdout
    Console {
        /// Print each board update as a JSON line
        #[arg(long)]
        json: bool,
    },
}
