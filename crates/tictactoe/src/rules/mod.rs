//! Game rules: win and draw evaluation.

pub mod draw;
pub mod win;

pub use win::Line;

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board into a [`GameStatus`].
///
/// A completed line wins; a full board with no winner is a draw;
/// anything else is in progress. Pure function over the board snapshot.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((mark, line)) = win::check(board) {
        GameStatus::Won { mark, line }
    } else if draw::is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;
    use crate::Position;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_partial_board_in_progress() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        board.place(Position::TopLeft, Mark::O).unwrap();
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_won_top_row() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos, Mark::X).unwrap();
        }
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                mark: Mark::X,
                line: Line::Row1
            }
        );
    }

    #[test]
    fn test_drawn_full_board() {
        // X O X / O X O / O X O - no line complete
        let mut board = Board::new();
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, mark).unwrap();
        }
        assert_eq!(evaluate(&board), GameStatus::Drawn);
    }
}
