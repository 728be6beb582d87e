//! Terminal management system
//!
//! Handles crossterm backend initialization, raw mode and the alternate
//! screen, and polling for key presses.

use crate::{LottoError, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Raw mode and the alternate screen are active
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).map_err(|e| LottoError::Tui(e.to_string()))?;
        Ok(Self {
            terminal,
            active: false,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|e| LottoError::Tui(e.to_string()))?;
        self.active = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        self.active = false;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to `timeout` for a key press. Release and repeat events are
    /// dropped.
    pub fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Outcome of a session: an event loop error wins over a failed restore
pub fn finish(run: Result<()>, restore: Result<()>) -> Result<()> {
    run.and(restore)
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(msg: &str) -> LottoError {
        LottoError::Io(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_finish_reports_loop_error_first() {
        let result = finish(Err(LottoError::Tui("draw failed".into())), Err(io_error("restore")));
        assert!(matches!(result, Err(LottoError::Tui(msg)) if msg == "draw failed"));
    }

    #[test]
    fn test_finish_reports_restore_error_after_clean_loop() {
        assert!(matches!(finish(Ok(()), Err(io_error("restore"))), Err(LottoError::Io(_))));
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
