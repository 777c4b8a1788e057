//! Blocking key decoder for raw-mode terminal input.
//!
//! Bytes are pulled one at a time from any [`Read`] source (stdin in the
//! binary, byte slices in tests). A plain byte becomes [`KeyEvent::Byte`];
//! an escape byte starts a VT100/xterm sequence that is resolved into a
//! [`NamedKey`].
//!
//! Only the first byte of a keypress can fail the read. Once an escape has
//! been seen, short reads, read errors and unknown sequences all collapse to
//! `NamedKey::Escape`, which the dispatcher ignores.

use std::io::{self, ErrorKind, Read};
use thiserror::Error;
use tracing::{debug, trace};

pub mod key;
mod sequence;

pub use key::{ESC, KeyEvent, NamedKey, QUIT_KEY, ctrl_key};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("reading standard input failed")]
    Read(#[from] io::Error),
    #[error("standard input closed")]
    Eof,
}

pub struct KeyDecoder<R> {
    reader: R,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Block until one keypress is available and decode it.
    pub fn read_key(&mut self) -> Result<KeyEvent, InputError> {
        let first = match self.next_byte() {
            Ok(Some(b)) => b,
            Ok(None) => return Err(InputError::Eof),
            Err(e) => return Err(InputError::Read(e)),
        };
        if first != ESC {
            trace!(target: "input", byte = first, "key_byte");
            return Ok(KeyEvent::Byte(first));
        }
        let key = self.read_escape_tail();
        trace!(target: "input", key = ?key, "key_named");
        Ok(KeyEvent::Named(key))
    }

    fn read_escape_tail(&mut self) -> NamedKey {
        let intro = match self.tail_byte() {
            Some(b @ (b'[' | b'O')) => b,
            _ => return NamedKey::Escape,
        };
        let Some(code) = self.tail_byte() else {
            return NamedKey::Escape;
        };
        match intro {
            b'[' if code.is_ascii_digit() => match self.tail_byte() {
                Some(b'~') => sequence::tilde_key(code),
                _ => NamedKey::Escape,
            },
            b'[' => sequence::csi_key(code),
            _ => sequence::ss3_key(code),
        }
    }

    /// Byte inside an escape sequence; any failure ends the sequence.
    fn tail_byte(&mut self) -> Option<u8> {
        match self.next_byte() {
            Ok(b) => b,
            Err(err) => {
                debug!(target: "input", %err, "escape_sequence_read_failed");
                None
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> KeyEvent {
        KeyDecoder::new(bytes).read_key().expect("decode")
    }

    #[test]
    fn plain_byte_is_passed_through() {
        assert_eq!(decode(b"q"), KeyEvent::Byte(b'q'));
        assert_eq!(decode(&[0x11]), KeyEvent::Byte(0x11));
    }

    #[test]
    fn arrows() {
        assert_eq!(decode(b"\x1b[A"), NamedKey::ArrowUp.into());
        assert_eq!(decode(b"\x1b[B"), NamedKey::ArrowDown.into());
        assert_eq!(decode(b"\x1b[C"), NamedKey::ArrowRight.into());
        assert_eq!(decode(b"\x1b[D"), NamedKey::ArrowLeft.into());
    }

    #[test]
    fn tilde_sequences() {
        assert_eq!(decode(b"\x1b[1~"), NamedKey::Home.into());
        assert_eq!(decode(b"\x1b[3~"), NamedKey::Delete.into());
        assert_eq!(decode(b"\x1b[4~"), NamedKey::End.into());
        assert_eq!(decode(b"\x1b[5~"), NamedKey::PageUp.into());
        assert_eq!(decode(b"\x1b[6~"), NamedKey::PageDown.into());
        assert_eq!(decode(b"\x1b[7~"), NamedKey::Home.into());
        assert_eq!(decode(b"\x1b[8~"), NamedKey::End.into());
    }

    #[test]
    fn home_end_under_both_introducers() {
        assert_eq!(decode(b"\x1b[H"), NamedKey::Home.into());
        assert_eq!(decode(b"\x1b[F"), NamedKey::End.into());
        assert_eq!(decode(b"\x1bOH"), NamedKey::Home.into());
        assert_eq!(decode(b"\x1bOF"), NamedKey::End.into());
    }

    #[test]
    fn unknown_sequences_degrade_to_escape() {
        assert_eq!(decode(b"\x1b[Z"), NamedKey::Escape.into());
        assert_eq!(decode(b"\x1b[2~"), NamedKey::Escape.into());
        assert_eq!(decode(b"\x1b[5x"), NamedKey::Escape.into());
        assert_eq!(decode(b"\x1bOA"), NamedKey::Escape.into());
        assert_eq!(decode(b"\x1bx1"), NamedKey::Escape.into());
    }

    #[test]
    fn foreign_introducer_ends_sequence_immediately() {
        let mut decoder = KeyDecoder::new(&b"\x1bjk"[..]);
        assert_eq!(decoder.read_key().unwrap(), NamedKey::Escape.into());
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::Byte(b'k'));
    }

    #[test]
    fn truncated_sequences_degrade_to_escape() {
        assert_eq!(decode(b"\x1b"), NamedKey::Escape.into());
        assert_eq!(decode(b"\x1b["), NamedKey::Escape.into());
        assert_eq!(decode(b"\x1b[5"), NamedKey::Escape.into());
    }

    #[test]
    fn consecutive_keys_are_decoded_in_order() {
        let mut decoder = KeyDecoder::new(&b"\x1b[Ax\x1b[6~"[..]);
        assert_eq!(decoder.read_key().unwrap(), NamedKey::ArrowUp.into());
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::Byte(b'x'));
        assert_eq!(decoder.read_key().unwrap(), NamedKey::PageDown.into());
        assert!(matches!(decoder.read_key(), Err(InputError::Eof)));
    }

    #[test]
    fn empty_input_is_eof() {
        assert!(matches!(KeyDecoder::new(&b""[..]).read_key(), Err(InputError::Eof)));
    }
}
