//! Full-screen terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, MenuItem, Screen};

use crate::config::Settings;
use crate::logging;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Raw mode and the alternate screen, undone on drop.
///
/// Dropping also happens while unwinding, so a panic in the loop still
/// hands the shell back a usable terminal.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the terminal UI until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    logging::init_file(settings.log_file(), settings.log_filter())?;
    info!(seed = ?settings.seed(), "Starting tic-tac-toe TUI");

    let app = App::new(settings.engine());

    let res = {
        let _guard = TerminalGuard::enter(io::stdout())?;
        Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| run_app(&mut terminal, app))
    };

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI exited");
    res
}

#[instrument(skip_all)]
fn run_app<B, R>(terminal: &mut Terminal<B>, mut app: App<R>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    R: Rng,
{
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
