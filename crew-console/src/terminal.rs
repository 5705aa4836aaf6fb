//! Terminal mode handling for the TUI

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Puts the terminal back the way it was when dropped, even on an early error
/// return or a panic unwinding through the event loop.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl TerminalGuard<io::Stdout> {
    /// Enable raw mode and switch stdout to the alternate screen
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out: io::stdout(),
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Guard writing to `out` without touching raw mode
    pub fn with_writer(mut out: W) -> io::Result<Self> {
        execute!(out, EnterAlternateScreen)?;
        Ok(Self {
            out,
            raw_mode: false,
        })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}
