use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Wheel, press, drag or release
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Reads terminal events on a dedicated thread and forwards them
///
/// The reader stops on its own once the handler is dropped and the next
/// send fails.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || read_loop(tx, tick_rate));
        Self { rx }
    }

    /// Wait for the next event; `None` once the reader has stopped
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

fn read_loop(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration) {
    loop {
        let event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(event) => translate(event),
                Err(e) => {
                    tracing::warn!("terminal event read failed: {}", e);
                    return;
                }
            },
            Ok(false) => Some(AppEvent::Tick),
            Err(e) => {
                tracing::warn!("terminal event poll failed: {}", e);
                return;
            }
        };

        if let Some(event) = event {
            if tx.send(event).is_err() {
                return;
            }
        }
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Only key presses; crossterm also reports releases on some systems
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}
