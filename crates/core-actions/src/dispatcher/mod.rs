//! Action dispatch.
//!
//! Pure, synchronous: the only side effect is on `EditorState`. Quitting is
//! reported back to the runtime, which owns the terminal and performs the
//! restore.

use crate::{Action, translate_key};
use core_input::KeyEvent;
use core_state::EditorState;

mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Cursor changed; the next frame differs from the last one.
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

pub fn dispatch(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::Quit => {
            tracing::debug!(target: "actions.dispatch", "quit");
            DispatchResult::quit()
        }
    }
}

/// Translate and dispatch in one step; unbound keys are a clean no-op.
pub fn dispatch_key(key: KeyEvent, state: &mut EditorState) -> DispatchResult {
    match translate_key(key) {
        Some(action) => dispatch(action, state),
        None => {
            tracing::trace!(target: "actions.dispatch", %key, "unbound_key");
            DispatchResult::clean()
        }
    }
}
