//! Escape sequences crossterm does not provide in the exact form we emit.

use crossterm::Command;
use std::fmt;

/// `ESC [ H`: move the cursor to the top-left cell.
///
/// `MoveTo(0, 0)` lands on the same cell but encodes as `ESC [ 1 ; 1 H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHome;

impl Command for CursorHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        crossterm::cursor::MoveTo(0, 0).execute_winapi()
    }
}
