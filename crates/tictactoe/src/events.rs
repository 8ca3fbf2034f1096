//! Notification events emitted toward the presentation layer.
//!
//! The controller describes display changes declaratively; it owns no
//! rendering logic. A frontend consumes these events to update marks,
//! hover styling, the strike indicator, and the game-over banner.

use crate::position::Position;
use crate::rules::Line;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line, identifying the strike indicator.
        line: Line,
    },
    /// The board filled with no completed line.
    Drawn,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            Outcome::Drawn => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { mark, .. } => write!(f, "Winner is {}!", mark),
            Outcome::Drawn => write!(f, "Draw!"),
        }
    }
}

/// Messages sent from the controller to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed and should be displayed.
    CellMarked {
        /// Where the mark landed.
        position: Position,
        /// Which mark to display.
        mark: Mark,
    },
    /// The hover preview should now show this mark on empty cells.
    HoverPreviewChanged {
        /// The mark that moves next.
        mark: Mark,
    },
    /// The game ended; show the banner and strike indicator and stop
    /// forwarding cell activations until reset.
    GameOver {
        /// How the game ended.
        outcome: Outcome,
    },
    /// The game was reset; clear all marks, strikes, and banners.
    GameReset,
}
