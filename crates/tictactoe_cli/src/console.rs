//! Line-oriented front-end: one command or position per line.

use rand::Rng;
use std::io::{self, BufRead, Write};
use tictactoe_engine::{BoardUpdate, Engine, MoveOutcome, Position, Presenter, Side};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Enter a square as an id (top-l, mid-c, bot-r), a label (center) or a digit 1-9.
Commands: new, board, help, quit";

/// Writes each update as it arrives, keeping the first write error.
struct UpdatePrinter<'a, W: Write> {
    out: &'a mut W,
    json: bool,
    status: io::Result<()>,
}

impl<W: Write> UpdatePrinter<'_, W> {
    fn write_update(&mut self, update: &BoardUpdate) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut *self.out, update)?;
            return writeln!(self.out);
        }

        let who = match update.side {
            Side::Player => "You",
            Side::Computer => "Computer",
        };
        writeln!(self.out, "{} played {} ({})", who, update.position, update.side.mark())?;

        if let Some(text) = update.message.text() {
            writeln!(self.out, "{}", text)?;
        }
        if let Some(line) = update.highlight {
            let cells: Vec<_> = line.cells.iter().map(|p| p.id()).collect();
            writeln!(self.out, "Winning line: {}", cells.join(", "))?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for UpdatePrinter<'_, W> {
    fn present(&mut self, update: &BoardUpdate) {
        if self.status.is_ok() {
            self.status = self.write_update(update);
        }
    }
}

/// A console game session.
pub struct Console<R> {
    engine: Engine<R>,
    json: bool,
}

impl<R: Rng> Console<R> {
    /// Creates a session around `engine`.
    pub fn new(engine: Engine<R>, json: bool) -> Self {
        Self { engine, json }
    }

    /// The game being played.
    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all, fields(json = self.json))]
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, mut out: W) -> io::Result<()> {
        info!("Console session started");
        self.print_board(&mut out)?;
        self.print_status(&mut out)?;
        self.prompt(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            debug!(command, "Console input");

            match command.to_ascii_lowercase().as_str() {
                "" => {}
                "quit" | "q" | "exit" => break,
                "help" | "?" => writeln!(out, "{}", HELP)?,
                "board" | "b" => {
                    self.print_board(&mut out)?;
                    self.print_status(&mut out)?;
                }
                "new" | "n" => {
                    self.engine.restart();
                    self.print_board(&mut out)?;
                    self.print_status(&mut out)?;
                }
                _ => self.play(command, &mut out)?,
            }

            self.prompt(&mut out)?;
        }

        info!(turns = self.engine.total_turns(), "Console session ended");
        Ok(())
    }

    fn play<W: Write>(&mut self, command: &str, out: &mut W) -> io::Result<()> {
        let position = match command.parse::<Position>() {
            Ok(position) => position,
            Err(e) => {
                warn!(error = %e, "Unrecognised input");
                writeln!(out, "{}. Type 'help' for commands.", e)?;
                return Ok(());
            }
        };

        let mut printer = UpdatePrinter {
            out: &mut *out,
            json: self.json,
            status: Ok(()),
        };
        let outcome = self.engine.play(position, &mut printer);
        printer.status?;

        match outcome {
            MoveOutcome::Ignored(rejection) => writeln!(out, "Ignored: {}", rejection),
            MoveOutcome::Applied(_) if self.json => Ok(()),
            MoveOutcome::Applied(_) => {
                self.print_board(out)?;
                if self.engine.is_over() {
                    writeln!(out, "Type 'new' to play again or 'quit' to exit.")
                } else {
                    self.print_status(out)
                }
            }
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(out, "\n{}\n", self.engine.board().display())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(out, "{}", self.engine.status_message())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.json && !self.engine.is_over() {
            write!(out, "> ")?;
        }
        out.flush()
    }
}
