//! Byte-to-key tables for the escape sequences terminals send.

use crate::key::NamedKey;

/// `ESC [ <digit> ~`
pub(crate) fn tilde_key(digit: u8) -> NamedKey {
    match digit {
        b'1' | b'7' => NamedKey::Home,
        b'3' => NamedKey::Delete,
        b'4' | b'8' => NamedKey::End,
        b'5' => NamedKey::PageUp,
        b'6' => NamedKey::PageDown,
        _ => NamedKey::Escape,
    }
}

/// `ESC [ <letter>`
pub(crate) fn csi_key(code: u8) -> NamedKey {
    match code {
        b'A' => NamedKey::ArrowUp,
        b'B' => NamedKey::ArrowDown,
        b'C' => NamedKey::ArrowRight,
        b'D' => NamedKey::ArrowLeft,
        b'H' => NamedKey::Home,
        b'F' => NamedKey::End,
        _ => NamedKey::Escape,
    }
}

/// `ESC O <letter>`
pub(crate) fn ss3_key(code: u8) -> NamedKey {
    match code {
        b'H' => NamedKey::Home,
        b'F' => NamedKey::End,
        _ => NamedKey::Escape,
    }
}
