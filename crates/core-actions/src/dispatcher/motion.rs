//! Motion sub-dispatch (cursor movement).
//!
//! All motions are clamped by `EditorState`; a motion against an edge is a
//! clean no-op rather than a wrap or an error.

use super::DispatchResult;
use crate::MotionKind;
use core_state::{Direction, EditorState};

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = (state.cursor_x, state.cursor_y);
    match kind {
        MotionKind::Left => {
            state.move_cursor(Direction::Left);
        }
        MotionKind::Right => {
            state.move_cursor(Direction::Right);
        }
        MotionKind::Up => {
            state.move_cursor(Direction::Up);
        }
        MotionKind::Down => {
            state.move_cursor(Direction::Down);
        }
        MotionKind::LineStart => state.line_start(),
        MotionKind::LineEnd => state.line_end(),
        MotionKind::PageUp => {
            state.move_page(Direction::Up);
        }
        MotionKind::PageDown => {
            state.move_page(Direction::Down);
        }
    }
    let after = (state.cursor_x, state.cursor_y);
    if before != after {
        tracing::trace!(target: "actions.dispatch", motion=?kind, x=before.0, y=before.1, to_x=after.0, to_y=after.1, "motion");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
