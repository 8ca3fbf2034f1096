//! Application state and logic.
//!
//! The app keeps its own display state (marks, hover, strike, banner)
//! and updates it only by consuming the controller's events. It never
//! reads the board or turn tracker directly.

use tictactoe::{GameController, GameEvent, Line, Mark, Outcome, Position};
use tracing::debug;

/// Main application state.
pub struct App {
    controller: GameController,
    cursor: Position,
    cells: [Option<Mark>; 9],
    hover: Option<Mark>,
    strike: Option<Line>,
    banner: Option<String>,
    player_x: String,
    player_o: String,
}

impl App {
    /// Creates a new application with the given player display names.
    pub fn new(player_x: String, player_o: String) -> Self {
        let controller = GameController::new();
        let hover = Some(controller.hover_target());
        Self {
            controller,
            cursor: Position::Center,
            cells: [None; 9],
            hover,
            strike: None,
            banner: None,
            player_x,
            player_o,
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// The displayed mark at a position, if any.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.cells[pos.to_index()]
    }

    /// The mark previewed on empty cells, if the game accepts moves.
    pub fn hover(&self) -> Option<Mark> {
        self.hover
    }

    /// The winning line to strike through, if any.
    pub fn strike(&self) -> Option<Line> {
        self.strike
    }

    /// The game-over banner text, if the game has ended.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Status line text for the current state.
    pub fn status_line(&self) -> String {
        match (&self.banner, self.hover) {
            (Some(banner), _) => format!("{} Press 'r' to play again, 'q' to quit.", banner),
            (None, Some(mark)) => format!(
                "{}'s turn ({}). Arrows or mouse to choose, Enter to mark.",
                self.player_name(mark),
                mark
            ),
            (None, None) => String::new(),
        }
    }

    /// Activates the cell under the cursor.
    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }

    /// Activates a cell, forwarding to the controller unless the
    /// game-over banner is up.
    pub fn activate(&mut self, pos: Position) {
        if self.banner.is_some() {
            return;
        }
        debug!(%pos, "Cell activated");
        let events = self.controller.handle_cell_activated(pos);
        self.apply_events(events);
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("Restart requested");
        let events = self.controller.handle_reset_requested();
        self.apply_events(events);
    }

    fn apply_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Applying event");
        match event {
            GameEvent::CellMarked { position, mark } => {
                self.cells[position.to_index()] = Some(mark);
            }
            GameEvent::HoverPreviewChanged { mark } => {
                self.hover = Some(mark);
            }
            GameEvent::GameOver { outcome } => {
                self.hover = None;
                self.banner = Some(match outcome {
                    Outcome::Won { mark, line } => {
                        self.strike = Some(line);
                        format!("Winner is {}!", self.player_name(mark))
                    }
                    Outcome::Drawn => "Draw!".to_string(),
                });
            }
            GameEvent::GameReset => {
                self.cells = [None; 9];
                self.strike = None;
                self.banner = None;
            }
        }
    }

    fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new("Ada".to_string(), "Grace".to_string())
    }

    #[test]
    fn test_activation_updates_display_state() {
        let mut app = app();
        app.activate(Position::Center);

        assert_eq!(app.mark_at(Position::Center), Some(Mark::X));
        assert_eq!(app.hover(), Some(Mark::O));
        assert!(app.banner().is_none());
        assert!(app.status_line().contains("Grace"));
    }

    #[test]
    fn test_win_shows_banner_and_strike() {
        let mut app = app();
        for index in [0, 3, 1, 4, 2] {
            app.activate(Position::from_index(index).unwrap());
        }

        assert_eq!(app.banner(), Some("Winner is Ada!"));
        assert_eq!(app.strike(), Some(Line::Row1));
        assert_eq!(app.hover(), None);

        // Input is suspended until restart.
        app.activate(Position::BottomRight);
        assert_eq!(app.mark_at(Position::BottomRight), None);
    }

    #[test]
    fn test_restart_clears_display_state() {
        let mut app = app();
        for index in [0, 3, 1, 4, 2] {
            app.activate(Position::from_index(index).unwrap());
        }
        app.restart();

        assert!(app.banner().is_none());
        assert!(app.strike().is_none());
        assert_eq!(app.hover(), Some(Mark::X));
        for pos in Position::ALL {
            assert_eq!(app.mark_at(pos), None);
        }
    }
}
