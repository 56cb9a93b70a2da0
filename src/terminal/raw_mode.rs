//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Keeps the terminal in raw mode until dropped, restoring the prior state.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    /// Enter raw mode. Nested guards leave the outer guard in charge.
    pub fn new() -> io::Result<Self> {
        let already = is_raw_mode_enabled().unwrap_or(false);
        if !already {
            enable_raw_mode()?;
        }
        Ok(Self { restore: !already })
    }

    /// Leave raw mode now instead of at drop (needed before a plain `println!`).
    pub fn release(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
            self.restore = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
