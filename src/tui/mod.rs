//! TUI module - Terminal dashboard for upwatch
//!
//! A ratatui front end over [`Dashboard`](crate::dashboard::Dashboard): site
//! list with search, stats and downtime chart for the selected site, and a
//! confirmation prompt before deleting.

#![cfg(feature = "tui")]

mod types;
mod state;
mod utils;
mod render;
mod input;

// Re-export main types for external use
pub use types::*;
pub use state::*;
pub use utils::centered_rect;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use crate::config::Config;
use crate::error::Result;

/// Run the TUI
pub fn run(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    tracing::info!(sites = app.dashboard.total(), "tui started");

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render::ui(f, app))?;

        // Poll with a timeout so the next-check countdown keeps ticking
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key_event(app, key.code, key.modifiers)?;
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse_event(app, mouse)?;
                }
                _ => {}
            }
        }

        if app.should_quit {
            tracing::info!("tui exiting");
            return Ok(());
        }
    }
}
