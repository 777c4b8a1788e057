//! Keypress → action translation and dispatch.
//!
//! `translate_key` is a pure table from decoded keys to editor actions; keys
//! without a binding (printable bytes, Delete, bare Escape) map to `None`.
//! `dispatch` applies an action to `EditorState`.

use core_input::{KeyEvent, NamedKey};

pub mod dispatcher;
pub use dispatcher::{DispatchResult, dispatch, dispatch_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Quit,
}

pub fn translate_key(key: KeyEvent) -> Option<Action> {
    if key.is_quit() {
        return Some(Action::Quit);
    }
    let motion = match key {
        KeyEvent::Named(NamedKey::ArrowUp) => MotionKind::Up,
        KeyEvent::Named(NamedKey::ArrowDown) => MotionKind::Down,
        KeyEvent::Named(NamedKey::ArrowLeft) => MotionKind::Left,
        KeyEvent::Named(NamedKey::ArrowRight) => MotionKind::Right,
        KeyEvent::Named(NamedKey::Home) => MotionKind::LineStart,
        KeyEvent::Named(NamedKey::End) => MotionKind::LineEnd,
        KeyEvent::Named(NamedKey::PageUp) => MotionKind::PageUp,
        KeyEvent::Named(NamedKey::PageDown) => MotionKind::PageDown,
        KeyEvent::Named(NamedKey::Delete | NamedKey::Escape) | KeyEvent::Byte(_) => return None,
    };
    Some(Action::Motion(motion))
}
