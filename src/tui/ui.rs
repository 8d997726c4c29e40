//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use cats_game_rules::{Mark, Position, Square, WinNotice};

const HINTS: &str = "arrows/hjkl move · enter select · 1-9 play · r restart · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, show_hints: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    if show_hints {
        let hints = Paragraph::new(HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);
    }

    if let Some(notice) = app.dialog() {
        draw_dialog(frame, notice);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    // Green once somebody has won, blue otherwise.
    let color = if app.game().winner().is_some() {
        Color::Green
    } else {
        Color::Blue
    };

    let status = Paragraph::new(app.game().status().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, center_rect(area, 40, 3));
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
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

    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, cells);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: &[Position]) {
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

    for (col, pos) in cells.iter().enumerate() {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        draw_cell(frame, cols[col * 2], app, *pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let label = (pos.to_index() + 1).to_string();
    let (symbol, mut style) = match app.game().board().get(pos) {
        Square::Empty => (label, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if app
        .game()
        .winning_line()
        .is_some_and(|line| line.contains(&pos))
    {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically centre the mark in a 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_dialog(frame: &mut Frame, notice: &WinNotice) {
    let area = center_rect(frame.area(), 30, 7);
    frame.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            notice.status().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "enter close · r restart",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title("Game Over")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(body, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
