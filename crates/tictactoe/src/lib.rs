//! Pure tic-tac-toe game logic with an event-emitting controller.
//!
//! # Architecture
//!
//! - **Types**: board, marks, and turn tracking ([`Board`], [`Mark`], [`Turn`])
//! - **Rules**: pure win and draw evaluation over a board snapshot
//! - **Controller**: applies moves, switches turns, detects terminal
//!   states, and emits [`GameEvent`]s for a presentation layer to render
//!
//! No rendering surface is required; any frontend that forwards cell
//! activations and consumes the emitted events can display the game.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameController, GameEvent, Mark, Position};
//!
//! let mut game = GameController::new();
//! let events = game.handle_cell_activated(Position::Center);
//! assert_eq!(
//!     events[0],
//!     GameEvent::CellMarked { position: Position::Center, mark: Mark::X }
//! );
//! assert_eq!(game.hover_target(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod events;
mod position;
pub mod rules;
mod types;

pub use controller::GameController;
pub use events::{GameEvent, Outcome};
pub use position::Position;
pub use rules::Line;
pub use types::{Board, Cell, GameStatus, Mark, PlaceError, Turn};
