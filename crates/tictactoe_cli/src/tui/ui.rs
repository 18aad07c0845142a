//! Stateless rendering of the menu and the board.

use super::app::{App, MenuItem, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameResult, Position, Side, Square};

const TITLE: &str = "Tic-Tac-Toe";

/// Draws whichever screen the app is on.
pub fn draw<R>(frame: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Menu => draw_menu(frame, chunks[1], app.menu_item()),
        Screen::Game => draw_game(frame, chunks[1], app),
    }

    let status = match app.screen() {
        Screen::Menu => "Play against the computer. You are X and move first.",
        Screen::Game => app.engine().status_message(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let keys = match app.screen() {
        Screen::Menu => "↑/↓ select · Enter confirm · q quit",
        Screen::Game => "arrows move · Enter/1-9 play · n new game · q menu",
    };
    let keys = Paragraph::new(keys)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[3]);
}

fn draw_menu(frame: &mut Frame, area: Rect, selected: MenuItem) {
    let lines: Vec<Line> = MenuItem::ALL
        .iter()
        .map(|item| {
            let style = if *item == selected {
                Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("  {}  ", item.label()), style))
        })
        .collect();

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Menu"));
    frame.render_widget(menu, center_rect(area, 24, 4));
}

fn draw_game<R>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(area);

    draw_board(frame, cols[0], app);
    draw_moves(frame, cols[1], app);
}

fn draw_board<R>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [0, 2, 4].into_iter().enumerate() {
        draw_row(frame, rows[chunk], app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row<R>(frame: &mut Frame, area: Rect, app: &App<R>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_coords(row, col) {
            draw_cell(frame, cols[chunk], app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

/// Background for a square once the game has ended, if it is highlighted.
fn end_highlight<R>(app: &App<R>, pos: Position) -> Option<Color> {
    let engine = app.engine();
    match engine.result() {
        GameResult::InProgress => None,
        GameResult::Draw => Some(Color::Yellow),
        result => {
            let on_line = engine.winning_line().is_some_and(|line| line.contains(pos));
            let color = if result == GameResult::PlayerWin { Color::Green } else { Color::Red };
            on_line.then_some(color)
        }
    }
}

fn draw_cell<R>(frame: &mut Frame, area: Rect, app: &App<R>, pos: Position) {
    let (symbol, mut style) = match app.engine().board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.digit()),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(side) => {
            let color = match side {
                Side::Player => Color::Blue,
                Side::Computer => Color::Red,
            };
            (
                format!(" {} ", side.mark()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    if let Some(bg) = end_highlight(app, pos) {
        style = style.bg(bg).fg(Color::Black);
    } else if pos == app.cursor() && app.engine().is_available(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    } else if pos == app.cursor() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves<R>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let lines: Vec<Line> = app
        .moves()
        .iter()
        .map(|update| {
            Line::from(format!(
                "{}. {} {}",
                update.turn,
                update.side.mark(),
                update.position.label()
            ))
        })
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(log, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
