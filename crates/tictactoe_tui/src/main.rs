//! Terminal UI for tic-tac-toe - two players at one keyboard.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Tic Tac Toe - terminal edition
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Display name for the X player
    #[arg(long, default_value = "Player X")]
    player_x: String,

    /// Display name for the O player
    #[arg(long, default_value = "Player O")]
    player_o: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(player_x = %cli.player_x, player_o = %cli.player_o, "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.player_x, cli.player_o);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Interactions run to completion one at a time; nothing happens
        // between polls.
        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),
                code => app.set_cursor(input::move_cursor(app.cursor(), code)),
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let area = terminal.get_frame().area();
                    if let Some(pos) = ui::position_at(area, mouse.column, mouse.row) {
                        app.set_cursor(pos);
                        app.activate(pos);
                    }
                }
            }
            _ => {}
        }
    }
}
