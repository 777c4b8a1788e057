//! Frame output handle.
//!
//! `std::io::Stdout` is line buffered, so a frame containing `\r\n` would
//! reach the terminal in several writes. On unix we write through a
//! duplicate of the stdout descriptor instead, which hands the whole frame
//! to the kernel in one `write_all`.

use std::io::{self, Write};

pub struct TerminalOutput {
    #[cfg(unix)]
    inner: std::fs::File,
    #[cfg(not(unix))]
    inner: io::Stdout,
}

impl TerminalOutput {
    #[cfg(unix)]
    pub fn stdout() -> io::Result<Self> {
        use std::os::fd::AsFd;
        let fd = io::stdout().as_fd().try_clone_to_owned()?;
        Ok(Self {
            inner: std::fs::File::from(fd),
        })
    }

    #[cfg(not(unix))]
    pub fn stdout() -> io::Result<Self> {
        Ok(Self {
            inner: io::stdout(),
        })
    }
}

impl Write for TerminalOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
