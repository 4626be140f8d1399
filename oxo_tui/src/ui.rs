//! Board and status rendering.

use oxo::{GameState, Line, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Draws the whole screen: title, status line, board, controls.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(13),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    // Recomputed from the state on every frame, never cached.
    let status = Paragraph::new(app.state().status_line()).alignment(Alignment::Center);
    f.render_widget(status, chunks[1]);

    render_board(f, chunks[2], app.state());

    let controls = Paragraph::new("1-9: place mark   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(controls, chunks[3]);
}

fn render_board(f: &mut Frame, area: Rect, state: &GameState) {
    let winning = state.outcome().winning_line();
    let board_area = center_rect(area, 40, 12);
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

    render_row(f, rows[0], state, &Position::ALL[0..3], winning);
    render_separator(f, rows[1]);
    render_row(f, rows[2], state, &Position::ALL[3..6], winning);
    render_separator(f, rows[3]);
    render_row(f, rows[4], state, &Position::ALL[6..9], winning);
}

fn render_row(f: &mut Frame, area: Rect, state: &GameState, row: &[Position], winning: Option<Line>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], state, row[0], winning);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], state, row[1], winning);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], state, row[2], winning);
}

fn render_square(f: &mut Frame, area: Rect, state: &GameState, pos: Position, winning: Option<Line>) {
    let (text, mut style) = match state.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning.is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
