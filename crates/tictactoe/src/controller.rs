//! Event-driven game controller.

use crate::events::{GameEvent, Outcome};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Turn};
use tracing::{debug, info, instrument};

/// Orchestrates moves, turn switching, win/draw detection, and reset.
///
/// The controller is the sole owner and mutator of the board and the
/// turn tracker. Each interaction handler runs to completion and
/// returns the display notifications it produced; invalid interactions
/// (occupied cell, move after game over) produce nothing and change
/// nothing.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: Turn,
    status: GameStatus,
    history: Vec<Position>,
}

impl GameController {
    /// Creates a controller for a fresh game, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::new(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history (positions played, in order).
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the mark that moves next, for hover previews on empty
    /// cells. Informational only.
    pub fn hover_target(&self) -> Mark {
        self.turn.current()
    }

    /// Handles a cell activation from the user.
    ///
    /// Accepted moves mutate the board exactly once, advance the turn
    /// exactly once, and re-evaluate the status, emitting `CellMarked`
    /// followed by either `GameOver` or the next hover preview.
    /// Activations on occupied cells or after the game has ended are
    /// ignored.
    #[instrument(skip(self), fields(mark = %self.turn.current()))]
    pub fn handle_cell_activated(&mut self, pos: Position) -> Vec<GameEvent> {
        if self.status.is_terminal() {
            debug!(%pos, "Ignoring activation after game over");
            return Vec::new();
        }

        let mark = self.turn.current();
        if self.board.place(pos, mark).is_err() {
            debug!(%pos, "Ignoring activation on occupied cell");
            return Vec::new();
        }
        self.history.push(pos);
        self.turn.advance();
        debug!(board = %self.board.display(), "Applied move");

        let mut events = vec![GameEvent::CellMarked { position: pos, mark }];

        self.status = rules::evaluate(&self.board);
        match self.status {
            GameStatus::Won { mark, line } => {
                info!(winner = %mark, line = %line, "Game won");
                events.push(GameEvent::GameOver {
                    outcome: Outcome::Won { mark, line },
                });
            }
            GameStatus::Drawn => {
                info!("Game drawn");
                events.push(GameEvent::GameOver {
                    outcome: Outcome::Drawn,
                });
            }
            GameStatus::InProgress => {
                events.push(GameEvent::HoverPreviewChanged {
                    mark: self.turn.current(),
                });
            }
        }

        events
    }

    /// Handles a reset request from the user.
    ///
    /// Restores an empty board, X to move, and in-progress status,
    /// regardless of prior state.
    #[instrument(skip(self))]
    pub fn handle_reset_requested(&mut self) -> Vec<GameEvent> {
        info!("Resetting game");
        self.board.reset();
        self.turn.reset();
        self.status = GameStatus::InProgress;
        self.history.clear();

        vec![
            GameEvent::GameReset,
            GameEvent::HoverPreviewChanged {
                mark: self.turn.current(),
            },
        ]
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
