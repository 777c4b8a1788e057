//! Key event model produced by the decoder and consumed by the dispatcher.
//!
//! A `KeyEvent` is produced once per keypress by [`crate::KeyDecoder`] and consumed
//! immediately by the dispatcher; nothing holds on to it afterwards.

use std::fmt;

/// Escape byte (0x1B) introducing every terminal control sequence.
pub const ESC: u8 = 0x1b;

/// Map a key to its control-chord byte by clearing the upper three bits.
///
/// `ctrl_key(b'q')` is the byte a terminal sends for Ctrl+Q (0x11).
#[inline]
pub const fn ctrl_key(k: u8) -> u8 {
    k & 0x1f
}

/// Byte that terminates the editor.
pub const QUIT_KEY: u8 = ctrl_key(b'q');

/// Logical keys recognised inside escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    /// Bare escape, or an escape sequence that could not be resolved.
    Escape,
}

/// One decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Verbatim input byte (printable or control).
    Byte(u8),
    Named(NamedKey),
}

impl KeyEvent {
    pub const fn is_quit(&self) -> bool {
        matches!(self, KeyEvent::Byte(QUIT_KEY))
    }
}

impl From<NamedKey> for KeyEvent {
    fn from(key: NamedKey) -> Self {
        KeyEvent::Named(key)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEvent::Byte(b) if b.is_ascii_graphic() || *b == b' ' => write!(f, "'{}'", *b as char),
            KeyEvent::Byte(b) if *b < 0x20 => write!(f, "C-{}", (b | 0x60) as char),
            KeyEvent::Byte(b) => write!(f, "0x{b:02x}"),
            KeyEvent::Named(key) => write!(f, "<{key:?}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_key_clears_upper_bits() {
        assert_eq!(ctrl_key(b'q'), 0x11);
        assert_eq!(ctrl_key(b'Q'), 0x11);
        assert_eq!(ctrl_key(b'a'), 0x01);
    }

    #[test]
    fn quit_detection_only_matches_ctrl_q() {
        assert!(KeyEvent::Byte(0x11).is_quit());
        assert!(!KeyEvent::Byte(b'q').is_quit());
        assert!(!KeyEvent::Named(NamedKey::Escape).is_quit());
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(KeyEvent::Byte(b'q').to_string(), "'q'");
        assert_eq!(KeyEvent::Byte(QUIT_KEY).to_string(), "C-q");
        assert_eq!(KeyEvent::Byte(0x7f).to_string(), "0x7f");
        assert_eq!(KeyEvent::from(NamedKey::PageUp).to_string(), "<PageUp>");
    }
}
