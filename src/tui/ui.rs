//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use super::input::Cursor;
use crate::games::tictactoe::{Cell, GameControls, Mark, WinningLine};

/// Renders the whole screen: title, board, turn line, status and help.
pub fn draw<C: GameControls>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Turn
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let turn = Paragraph::new(app.turn_line())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(turn, chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("Arrows: move | Enter/Space or 1-9: place | R: reset | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(message) = app.result_message() {
        draw_result(frame, area, &message);
    }
}

fn draw_board<C: GameControls>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let board_area = center_rect(area, 40, 11);
    let grid = app.game().get_board();
    let line = app.game().winning_line();
    let cursor = app.cursor();

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

    for (r, cells) in grid.iter().enumerate() {
        draw_row(frame, rows[r * 2], r, cells, cursor, line);
        if r < grid.len() - 1 {
            draw_separator(frame, rows[r * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    row: usize,
    cells: &[Cell; 3],
    cursor: Cursor,
    line: Option<WinningLine>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for (c, cell) in cells.iter().enumerate() {
        let highlighted = cursor == Cursor { row, column: c };
        let winning = line.is_some_and(|line| line.contains(row, c));
        draw_cell(frame, cols[c * 2], cell, highlighted, winning);
        if c < cells.len() - 1 {
            draw_separator_vertical(frame, cols[c * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &Cell, highlighted: bool, winning: bool) {
    let (symbol, base_style) = match cell.mark() {
        None => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Some(mark @ Mark::One) => (
            format!(" {} ", mark.symbol()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(mark @ Mark::Two) => (
            format!(" {} ", mark.symbol()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Vertically center within the three-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_result(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 44, 5);
    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("R: play again | Q: quit"),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
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
