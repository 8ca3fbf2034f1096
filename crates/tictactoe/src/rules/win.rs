//! Win detection.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 winning lines.
///
/// The variant order is the evaluation order: rows top to bottom,
/// columns left to right, then the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Top row (0, 1, 2).
    Row1,
    /// Middle row (3, 4, 5).
    Row2,
    /// Bottom row (6, 7, 8).
    Row3,
    /// Left column (0, 3, 6).
    Column1,
    /// Center column (1, 4, 7).
    Column2,
    /// Right column (2, 5, 8).
    Column3,
    /// Top-left to bottom-right (0, 4, 8).
    Diagonal1,
    /// Top-right to bottom-left (2, 4, 6).
    Diagonal2,
}

impl Line {
    /// All 8 lines in evaluation order.
    pub const ALL: [Line; 8] = [
        Line::Row1,
        Line::Row2,
        Line::Row3,
        Line::Column1,
        Line::Column2,
        Line::Column3,
        Line::Diagonal1,
        Line::Diagonal2,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::Row1 => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::Row2 => [Position::MiddleLeft, Position::Center, Position::MiddleRight],
            Line::Row3 => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::Column1 => [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            Line::Column2 => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::Column3 => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::Diagonal1 => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::Diagonal2 => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// Display identifier for this line, consumed by the presentation
    /// layer to pick the strike-through styling.
    pub fn label(self) -> &'static str {
        match self {
            Line::Row1 => "row-1",
            Line::Row2 => "row-2",
            Line::Row3 => "row-3",
            Line::Column1 => "column-1",
            Line::Column2 => "column-2",
            Line::Column3 => "column-3",
            Line::Diagonal1 => "diagonal-1",
            Line::Diagonal2 => "diagonal-2",
        }
    }

    /// Checks whether this line contains the given position.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the winning mark and the first completed line in evaluation
/// order, or `None`. Simultaneously complete lines cannot arise under
/// alternating play; on an artificial board the order decides.
#[instrument]
pub fn check(board: &Board) -> Option<(Mark, Line)> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(mark) = cell {
                return Some((mark, line));
            }
        }
    }

    None
}
