//! Frame output buffer.
//!
//! Every byte of a frame is appended here first and reaches the terminal in
//! a single `write_all` + `flush`, so the terminal never shows a half-drawn
//! screen. The buffer implements [`Write`] so crossterm commands can be
//! `queue!`d straight into it.
//!
//! A flushed buffer is empty again and can carry the next frame.

use crossterm::{Command, queue};
use std::io::{self, Write};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(cap),
        }
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn append_str(&mut self, s: &str) {
        self.append(s.as_bytes());
    }

    /// Append the ANSI form of a crossterm command.
    pub fn command(&mut self, cmd: impl Command) -> io::Result<()> {
        queue!(self, cmd)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Hand the whole frame to `out` in one write, then start over empty.
    /// Returns the number of bytes written.
    pub fn flush_to<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<usize> {
        out.write_all(&self.bytes)?;
        out.flush()?;
        let written = self.bytes.len();
        self.bytes.clear();
        Ok(written)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
