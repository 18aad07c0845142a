//! Front-ends for the tic-tac-toe engine.
//!
//! - [`tui`]: full-screen ratatui interface with a main menu.
//! - [`console`]: line-oriented play over any reader and writer, with an
//!   optional JSON-lines output for scripting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod tui;
