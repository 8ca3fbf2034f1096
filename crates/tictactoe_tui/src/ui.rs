//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe::{Mark, Position};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the full game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Maps a terminal coordinate to the board cell under it, if any.
pub fn position_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = board_rect(screen_chunks(area)[1]);
    Position::ALL
        .into_iter()
        .find(|&pos| contains(cell_rect(board, pos), column, row))
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
        ])
        .split(area)
}

fn board_rect(area: Rect) -> Rect {
    center_rect(area, BOARD_WIDTH, BOARD_HEIGHT)
}

fn cell_rect(board: Rect, pos: Position) -> Rect {
    Rect {
        x: board.x + pos.col() as u16 * (CELL_WIDTH + 1),
        y: board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = board_rect(area);

    for pos in Position::ALL {
        draw_cell(frame, cell_rect(board, pos), app, pos);
    }

    // Grid lines between the cells.
    for i in 1..3 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        let sep = Paragraph::new("─".repeat(board.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, Rect::new(board.x, y, board.width, 1));
    }
    for i in 1..3 {
        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        for y in board.y..board.y + board.height {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, Rect::new(x, y, 1, 1));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let struck = app.strike().is_some_and(|line| line.contains(pos));

    let (symbol, base_style) = match app.mark_at(pos) {
        Some(mark) if struck => (glyph(mark), strike_style()),
        Some(mark) => (glyph(mark), mark_style(mark)),
        // Empty cell: preview the next mark dimly under the cursor.
        None if pos == app.cursor() && app.hover().is_some() => (
            glyph(app.hover().expect("hover checked above")),
            Style::default().fg(Color::DarkGray),
        ),
        None => ("   ", Style::default().fg(Color::DarkGray)),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    // Pad to cell height so the glyph sits on the middle row.
    let text = format!("\n{}", symbol);
    let cell = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn glyph(mark: Mark) -> &'static str {
    match mark {
        Mark::X => " X ",
        Mark::O => " O ",
    }
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn strike_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rects_do_not_overlap() {
        let board = Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT);
        for a in Position::ALL {
            for b in Position::ALL {
                if a == b {
                    continue;
                }
                let ra = cell_rect(board, a);
                let rb = cell_rect(board, b);
                assert!(ra.intersection(rb).is_empty(), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn test_position_at_finds_cells() {
        let area = Rect::new(0, 0, 80, 24);
        let board = board_rect(screen_chunks(area)[1]);

        for pos in Position::ALL {
            let rect = cell_rect(board, pos);
            assert_eq!(position_at(area, rect.x, rect.y), Some(pos));
            assert_eq!(
                position_at(area, rect.x + rect.width - 1, rect.y + rect.height - 1),
                Some(pos)
            );
        }
    }

    #[test]
    fn test_position_at_misses_grid_lines() {
        let area = Rect::new(0, 0, 80, 24);
        let board = board_rect(screen_chunks(area)[1]);

        // First vertical separator column.
        let x = board.x + CELL_WIDTH;
        assert_eq!(position_at(area, x, board.y), None);
    }
}
