//! Full-frame renderer.
//!
//! A frame is one self-contained escape stream built from `EditorState` and
//! `EditorConfig` alone:
//!
//! 1. hide the cursor;
//! 2. optionally clear the whole screen, then home the cursor;
//! 3. one row per screen line: the welcome banner on row `rows / 3` (when
//!    enabled) or a `~` filler, each followed by erase-to-end-of-line and,
//!    except for the last row, `\r\n`;
//! 4. position the cursor at the clamped, 1-based tracked cell;
//! 5. show the cursor.
//!
//! Rendering the same state twice yields byte-identical frames. The caller
//! flushes the returned [`OutputBuffer`] with a single write.

use anyhow::Result;
use core_state::{EditorConfig, EditorState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    terminal::{Clear, ClearType},
};

mod ansi;
mod welcome;
pub mod writer;

pub use ansi::CursorHome;
pub use welcome::welcome_line;
pub use writer::OutputBuffer;

const ROW_FILLER: &str = "~";

/// Row on which the welcome banner is drawn.
pub fn banner_row(screen_rows: usize) -> usize {
    screen_rows / 3
}

pub fn render_frame(state: &EditorState, config: &EditorConfig) -> Result<OutputBuffer> {
    let rows = state.screen_rows();
    let cols = state.screen_cols();
    // ~ + erase + CRLF per row, plus banner and framing sequences.
    let mut out = OutputBuffer::with_capacity(rows * 6 + cols + 32);

    out.command(Hide)?;
    if config.full_clear {
        out.command(Clear(ClearType::All))?;
    }
    out.command(CursorHome)?;

    draw_rows(&mut out, state, config)?;

    let (x, y) = if config.cursor_tracking {
        state.clamped_cursor()
    } else {
        (0, 0)
    };
    out.command(MoveTo(to_cell(x), to_cell(y)))?;
    out.command(Show)?;

    tracing::trace!(target: "render", rows, cols, x, y, bytes = out.len(), "frame_built");
    Ok(out)
}

fn draw_rows(out: &mut OutputBuffer, state: &EditorState, config: &EditorConfig) -> Result<()> {
    let rows = state.screen_rows();
    let banner_at = config.banner.then(|| banner_row(rows));
    for y in 0..rows {
        if banner_at == Some(y) {
            out.append_str(&welcome_line(state.screen_cols(), config));
        } else {
            out.append_str(ROW_FILLER);
        }
        out.command(Clear(ClearType::UntilNewLine))?;
        if y + 1 < rows {
            out.append_str("\r\n");
        }
    }
    Ok(())
}

/// Sequence written on quit: clear the screen and home the cursor.
pub fn render_exit() -> Result<OutputBuffer> {
    let mut out = OutputBuffer::new();
    out.command(Clear(ClearType::All))?;
    out.command(CursorHome)?;
    Ok(out)
}

fn to_cell(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
