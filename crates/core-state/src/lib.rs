//! Editor state (screen dimensions and the cursor cell) and runtime policy.
//!
//! Dimensions are captured once at startup and are always positive. The
//! cursor is a zero-based cell offset; every movement primitive clamps it to
//! `[0, cols-1] x [0, rows-1]` and a move against an edge is a no-op.
//! `cursor_x`/`cursor_y` stay public for the runtime and tests, so
//! [`EditorState::clamp_cursor`] runs before each frame to restore the
//! bound after any direct assignment.

use thiserror::Error;
use tracing::trace;

pub mod config;

pub use config::{EditorConfig, PRODUCT_NAME, PRODUCT_VERSION};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("screen dimensions must be positive (got {cols}x{rows})")]
    InvalidDimensions { cols: usize, rows: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub cursor_x: usize,
    pub cursor_y: usize,
    screen_rows: usize,
    screen_cols: usize,
}

impl EditorState {
    /// Fresh state with the cursor at the top-left cell.
    pub fn new(screen_cols: usize, screen_rows: usize) -> Result<Self, StateError> {
        if screen_cols == 0 || screen_rows == 0 {
            return Err(StateError::InvalidDimensions {
                cols: screen_cols,
                rows: screen_rows,
            });
        }
        Ok(Self {
            cursor_x: 0,
            cursor_y: 0,
            screen_rows,
            screen_cols,
        })
    }

    pub fn screen_rows(&self) -> usize {
        self.screen_rows
    }

    pub fn screen_cols(&self) -> usize {
        self.screen_cols
    }

    fn max_x(&self) -> usize {
        self.screen_cols - 1
    }

    fn max_y(&self) -> usize {
        self.screen_rows - 1
    }

    /// Cursor position clamped to the screen, without mutating state.
    pub fn clamped_cursor(&self) -> (usize, usize) {
        (self.cursor_x.min(self.max_x()), self.cursor_y.min(self.max_y()))
    }

    pub fn clamp_cursor(&mut self) {
        (self.cursor_x, self.cursor_y) = self.clamped_cursor();
    }

    /// Move one cell; returns whether the cursor changed.
    pub fn move_cursor(&mut self, dir: Direction) -> bool {
        self.clamp_cursor();
        let before = (self.cursor_x, self.cursor_y);
        match dir {
            Direction::Left => self.cursor_x = self.cursor_x.saturating_sub(1),
            Direction::Right if self.cursor_x < self.max_x() => self.cursor_x += 1,
            Direction::Up => self.cursor_y = self.cursor_y.saturating_sub(1),
            Direction::Down if self.cursor_y < self.max_y() => self.cursor_y += 1,
            Direction::Right | Direction::Down => {}
        }
        let moved = before != (self.cursor_x, self.cursor_y);
        if moved {
            trace!(target: "state", ?dir, x = self.cursor_x, y = self.cursor_y, "cursor_moved");
        }
        moved
    }

    /// Repeat `dir` once per screen row, as the page keys do.
    pub fn move_page(&mut self, dir: Direction) -> bool {
        let mut moved = false;
        for _ in 0..self.screen_rows {
            moved |= self.move_cursor(dir);
        }
        moved
    }

    pub fn line_start(&mut self) {
        self.clamp_cursor();
        self.cursor_x = 0;
    }

    pub fn line_end(&mut self) {
        self.clamp_cursor();
        self.cursor_x = self.max_x();
    }
}
