mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use verdura_catalog::CatalogClient;

pub use app::CatalogScreen;

use crate::error::VduError;

pub async fn run(client: CatalogClient) -> Result<(), VduError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the screen; its one fetch starts right away.
    let mut screen = CatalogScreen::new(client);
    screen.start_fetch();

    // Run event loop
    let result = run_loop(&mut terminal, &mut screen).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    screen: &mut CatalogScreen,
) -> Result<(), VduError> {
    loop {
        terminal.draw(|f| ui::render(f, screen))?;

        // Poll for events with timeout to allow checking the fetch outcome
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            input::handle_event(screen, event);
        }

        screen.poll_fetch();

        if screen.should_quit {
            break;
        }
    }

    Ok(())
}
