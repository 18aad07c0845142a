//! `tictactoe` binary.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::cli::{Cli, Command};
use tictactoe_cli::config::Settings;
use tictactoe_cli::console::Console;
use tictactoe_cli::{logging, tui};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_seed(cli.seed);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run(&settings),
        Command::Console { json } => {
            logging::init_stderr(settings.log_filter());
            info!(seed = ?settings.seed(), json, "Starting console session");

            let mut console = Console::new(settings.engine(), json);
            console.run(io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}
