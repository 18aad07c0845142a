//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use rand::Rng;
use tictactoe_engine::{BoardUpdate, Engine, MoveOutcome, Position};
use tracing::{debug, info};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen with New Game / Quit.
    Menu,
    /// The board.
    Game,
}

/// Entries on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Start a fresh game.
    NewGame,
    /// Leave the program.
    Quit,
}

impl MenuItem {
    /// Menu entries in display order.
    pub const ALL: [MenuItem; 2] = [MenuItem::NewGame, MenuItem::Quit];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::NewGame => "New Game",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Main application state.
pub struct App<R> {
    engine: Engine<R>,
    screen: Screen,
    menu_item: MenuItem,
    cursor: Position,
    moves: Vec<BoardUpdate>,
    running: bool,
}

impl<R: Rng> App<R> {
    /// Creates the application on the main menu.
    pub fn new(engine: Engine<R>) -> Self {
        Self {
            engine,
            screen: Screen::Menu,
            menu_item: MenuItem::NewGame,
            cursor: Position::Center,
            moves: Vec::new(),
            running: true,
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.menu_item = match self.menu_item {
                    MenuItem::NewGame => MenuItem::Quit,
                    MenuItem::Quit => MenuItem::NewGame,
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.menu_item {
                MenuItem::NewGame => self.new_game(),
                MenuItem::Quit => self.running = false,
            },
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Back to menu");
                self.screen = Screen::Menu;
            }
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, position: Position) {
        if let MoveOutcome::Ignored(rejection) = self.engine.play(position, &mut self.moves) {
            debug!(%position, %rejection, "Square not playable");
        }
    }

    /// Clears the board and shows the game screen.
    pub fn new_game(&mut self) {
        info!("New game");
        self.engine.restart();
        self.moves.clear();
        self.cursor = Position::Center;
        self.screen = Screen::Game;
    }
}

impl<R> App<R> {
    /// The game being played.
    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Highlighted menu entry.
    pub fn menu_item(&self) -> MenuItem {
        self.menu_item
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Marks placed this game, oldest first.
    pub fn moves(&self) -> &[BoardUpdate] {
        &self.moves
    }

    /// False once the user has chosen to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
