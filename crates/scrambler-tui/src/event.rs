use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    poll_rate: Duration,
}

impl EventHandler {
    pub fn new(poll_rate_ms: u64) -> Self {
        Self {
            poll_rate: Duration::from_millis(poll_rate_ms),
        }
    }

    /// Poll for the next event.
    ///
    /// `until_deadline` is the time until the next scheduled animation
    /// tick; polling blocks no longer than that (capped at the handler's
    /// poll rate) so ticks fire on time.
    pub fn next(&self, until_deadline: Option<Duration>) -> Result<Option<AppEvent>> {
        let timeout = until_deadline.map_or(self.poll_rate, |d| d.min(self.poll_rate));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
