//! Raw-mode terminal control.
//!
//! The controlling terminal's line discipline is process-wide state. Only
//! this crate changes it, and only through the [`RawMode`] capability:
//! `enable` hands back an opaque saved-mode token, `restore` consumes it.
//! [`RawModeGuard`] pairs the two so the token is restored exactly once on
//! every exit path, including early returns and unwinding panics.
//!
//! [`FakeTerminal`] implements the same capability against an in-memory
//! attribute store for tests that have no TTY.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled, size};
use std::io::{self, IsTerminal};
use thiserror::Error;
use tracing::{debug, error, info};

pub mod fake;
mod output;
#[cfg(unix)]
mod signals;

pub use fake::{FakeProbe, FakeTerminal, TermAttrs};
#[cfg(unix)]
pub use signals::{HANDLED_SIGNALS, SignalRestore, restore_for_signal};
pub use output::TerminalOutput;

#[derive(Debug, Error)]
pub enum TerminalError {
    /// Raw-mode switch (`op` is "enable" or "restore") failed.
    #[error("terminal mode {op} failed")]
    Mode {
        op: &'static str,
        #[source]
        source: io::Error,
    },
    /// The size query failed or reported a zero dimension.
    #[error("window size query failed")]
    WindowSize(#[source] io::Error),
}

impl TerminalError {
    pub fn enable(source: io::Error) -> Self {
        Self::Mode {
            op: "enable",
            source,
        }
    }

    pub fn restore(source: io::Error) -> Self {
        Self::Mode {
            op: "restore",
            source,
        }
    }
}

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub cols: u16,
    pub rows: u16,
}

impl WindowSize {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    fn validated(self) -> Result<Self, TerminalError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(TerminalError::WindowSize(io::Error::other(format!(
                "window size {}x{} is not usable",
                self.cols, self.rows
            ))));
        }
        Ok(self)
    }
}

/// Capability to switch the controlling terminal into raw mode and back.
pub trait RawMode {
    /// Attribute set captured before raw mode was entered.
    type Saved;

    fn enable(&mut self) -> Result<Self::Saved, TerminalError>;
    fn restore(&mut self, saved: Self::Saved) -> Result<(), TerminalError>;
    fn window_size(&self) -> Result<WindowSize, TerminalError>;
}

/// Saved mode for [`CrosstermTerminal`]. The termios snapshot itself is kept
/// by crossterm; the token records whether raw mode was already on.
#[derive(Debug)]
pub struct SavedMode {
    was_raw: bool,
}

/// Real terminal backed by crossterm.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl RawMode for CrosstermTerminal {
    type Saved = SavedMode;

    fn enable(&mut self) -> Result<SavedMode, TerminalError> {
        if !io::stdin().is_terminal() {
            return Err(TerminalError::enable(io::Error::other(
                "standard input is not a terminal",
            )));
        }
        let was_raw = is_raw_mode_enabled().map_err(TerminalError::enable)?;
        enable_raw_mode().map_err(TerminalError::enable)?;
        debug!(target: "terminal", was_raw, "raw_mode_enabled");
        Ok(SavedMode { was_raw })
    }

    fn restore(&mut self, saved: SavedMode) -> Result<(), TerminalError> {
        if !saved.was_raw {
            disable_raw_mode().map_err(TerminalError::restore)?;
        }
        debug!(target: "terminal", was_raw = saved.was_raw, "raw_mode_restored");
        Ok(())
    }

    fn window_size(&self) -> Result<WindowSize, TerminalError> {
        let (cols, rows) = size().map_err(TerminalError::WindowSize)?;
        WindowSize::new(cols, rows).validated()
    }
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct RawModeGuard<T: RawMode> {
    terminal: T,
    saved: Option<T::Saved>,
}

impl<T: RawMode> RawModeGuard<T> {
    /// Enter raw mode and hold the saved attributes until restore or drop.
    pub fn acquire(mut terminal: T) -> Result<Self, TerminalError> {
        let saved = terminal.enable()?;
        info!(target: "terminal", "raw_mode_acquired");
        Ok(Self {
            terminal,
            saved: Some(saved),
        })
    }

    /// Restore the saved attributes. Later calls (and the drop) are no-ops.
    pub fn restore(&mut self) -> Result<(), TerminalError> {
        match self.saved.take() {
            Some(saved) => self.terminal.restore(saved),
            None => Ok(()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    pub fn window_size(&self) -> Result<WindowSize, TerminalError> {
        self.terminal.window_size()
    }
}

impl<T: RawMode> Drop for RawModeGuard<T> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!(target: "terminal", %err, "raw_mode_restore_failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_window_is_rejected() {
        let err = WindowSize::new(0, 24).validated().unwrap_err();
        assert!(matches!(err, TerminalError::WindowSize(_)));
        let source = std::error::Error::source(&err).expect("size error has a source");
        assert_eq!(source.to_string(), "window size 0x24 is not usable");
        assert!(WindowSize::new(80, 24).validated().is_ok());
    }

    #[test]
    fn guard_restores_on_drop() {
        let fake = FakeTerminal::new(WindowSize::new(80, 24));
        let probe = fake.probe();
        {
            let guard = RawModeGuard::acquire(fake).unwrap();
            assert!(guard.is_active());
            assert!(probe.attrs().is_raw());
        }
        assert_eq!(probe.enable_calls(), 1);
        assert_eq!(probe.restore_calls(), 1);
        assert_eq!(probe.attrs(), TermAttrs::cooked());
    }

    #[test]
    fn explicit_restore_is_not_repeated_by_drop() {
        let fake = FakeTerminal::new(WindowSize::new(80, 24));
        let probe = fake.probe();
        let mut guard = RawModeGuard::acquire(fake).unwrap();
        guard.restore().unwrap();
        guard.restore().unwrap();
        assert!(!guard.is_active());
        drop(guard);
        assert_eq!(probe.restore_calls(), 1);
    }

    #[test]
    fn guard_restores_while_unwinding() {
        let fake = FakeTerminal::new(WindowSize::new(80, 24));
        let probe = fake.probe();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = RawModeGuard::acquire(fake).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(probe.restore_calls(), 1);
        assert!(!probe.attrs().is_raw());
    }

    #[test]
    fn failed_enable_leaves_nothing_to_restore() {
        let fake = FakeTerminal::new(WindowSize::new(80, 24)).failing_enable();
        let probe = fake.probe();
        let err = RawModeGuard::acquire(fake).err().unwrap();
        assert!(matches!(err, TerminalError::Mode { op: "enable", .. }));
        assert_eq!(probe.restore_calls(), 0);
    }
}
