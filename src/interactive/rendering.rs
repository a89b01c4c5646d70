//! TUI rendering with ratatui
//!
//! Tile grid, hint keyboard, message log and status bar.

use super::app::{App, MessageStyle};
use crate::core::Color as Hint;
use crate::game::{KEYBOARD_ROWS, Phase, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Rows needed for the board: a tile line and a spacer per attempt, plus borders
fn board_height(max_attempts: usize) -> u16 {
    u16::try_from(max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(2)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = board_height(app.game.config().max_attempts);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(4),               // Messages
            Constraint::Length(3),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD PUZZLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn hint_color(hint: Hint) -> Color {
    match hint {
        Hint::Green => Color::Green,
        Hint::Yellow => Color::Yellow,
        Hint::Gray => Color::DarkGray,
    }
}

fn tile_style(tile: &Tile, invalid: bool) -> Style {
    let mut style = match tile.color {
        Some(hint) => Style::default().fg(Color::Black).bg(hint_color(hint)),
        None if tile.letter.is_some() => Style::default().fg(Color::White).bg(Color::Gray),
        None => Style::default().bg(Color::Reset),
    };
    if tile.flipping {
        style = style.add_modifier(Modifier::DIM);
    }
    if tile.popping {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if invalid {
        style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
    }
    style
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let invalid_row = app.game.invalid_row();
    let mut lines = Vec::new();

    for (r, row) in app.game.board().rows().iter().enumerate() {
        let spans: Vec<Span> = row
            .iter()
            .flat_map(|tile| {
                let letter = tile.display_letter().unwrap_or('·');
                [
                    Span::styled(format!(" {letter} "), tile_style(tile, invalid_row == Some(r))),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} letters ", app.game.word_len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = keys.color_of(letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |hint| Style::default().fg(Color::Black).bg(hint_color(hint)),
                    );
                    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let color = match msg.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(msg.text.as_str()).style(Style::default().fg(color))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let (label, color) = match app.game.phase() {
        Phase::AcceptingInput => ("Your turn", Color::Green),
        Phase::Locked => ("Revealing…", Color::Yellow),
        Phase::Won => ("Solved", Color::Cyan),
        Phase::Lost => ("Game over", Color::Red),
    };

    let status = Line::from(vec![
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  │  Row {}/{}  │  Played {}  Won {}",
            (state.current_row + 1).min(app.game.config().max_attempts),
            app.game.config().max_attempts,
            app.stats.total_games,
            app.stats.games_won
        )),
    ]);

    let paragraph = Paragraph::new(status).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}
