use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use folio_core::AppConfig;
use folio_tui::{app::App, event::EventHandler, ui};

pub async fn run(config: Arc<AppConfig>, start: Option<String>) -> Result<()> {
    let start = match start.as_deref() {
        Some(key) => config.resolve_section(key)?,
        None => 0,
    };

    // Structural errors surface before the terminal is touched
    let mut app = App::new(config.clone(), start)?;
    info!(sections = config.sections.len(), start, "starting folio");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app).await;

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

async fn main_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new(app.config.ui.tick_rate());

    loop {
        let now = Instant::now();
        app.on_timer(now);
        app.on_frame(now);

        if let Some(title) = app.take_title() {
            execute!(terminal.backend_mut(), SetTitle(title))?;
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Sleep until input, the next animation frame or the next navigator deadline
        let wake = app.next_wake(Instant::now());
        tokio::select! {
            event = events.next() => match event {
                Some(event) => app.handle_event(event, Instant::now()),
                None => break,
            },
            _ = sleep_until(wake) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
