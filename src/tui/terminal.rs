//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;

use crate::config::{CoinSendPaths, Settings};
use crate::services::ProfilePicture;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, paths: &CoinSendPaths) -> Result<()> {
    let profile = ProfilePicture::load(settings.resolve_profile_image(paths).as_deref());
    let mut app = App::new(settings.clone(), profile);
    tracing::info!(balance = %app.wallet.balance(), "starting wallet ui");

    let mut terminal = init_terminal()?;
    let events = EventHandler::new(settings.frame_interval());

    let outcome = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    tracing::info!(sent = app.wallet.history().len(), "wallet ui closed");
    outcome
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Tick => app.on_tick(Instant::now()),
            event => handle_event(app, event, Instant::now()),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
