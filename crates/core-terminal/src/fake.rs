//! In-memory terminal used by tests.
//!
//! The attribute store models the three line-discipline flags raw mode
//! turns off. A [`FakeProbe`] shares the store so a test can keep
//! observing it after the terminal has moved into a guard or runtime.

use crate::{RawMode, TerminalError, WindowSize};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermAttrs {
    pub canonical: bool,
    pub echo: bool,
    pub signals: bool,
}

impl TermAttrs {
    /// Line-buffered, echoing, signal-generating: a freshly opened terminal.
    pub const fn cooked() -> Self {
        Self {
            canonical: true,
            echo: true,
            signals: true,
        }
    }

    pub const fn raw() -> Self {
        Self {
            canonical: false,
            echo: false,
            signals: false,
        }
    }

    pub fn is_raw(&self) -> bool {
        *self == Self::raw()
    }
}

#[derive(Debug)]
struct FakeState {
    attrs: TermAttrs,
    enable_calls: usize,
    restore_calls: usize,
}

#[derive(Debug)]
pub struct FakeTerminal {
    state: Rc<RefCell<FakeState>>,
    size: Option<WindowSize>,
    fail_enable: bool,
}

impl FakeTerminal {
    pub fn new(size: WindowSize) -> Self {
        Self::with_attrs(size, TermAttrs::cooked())
    }

    pub fn with_attrs(size: WindowSize, attrs: TermAttrs) -> Self {
        Self {
            state: Rc::new(RefCell::new(FakeState {
                attrs,
                enable_calls: 0,
                restore_calls: 0,
            })),
            size: Some(size),
            fail_enable: false,
        }
    }

    /// Make every `enable` fail as if there were no controlling terminal.
    pub fn failing_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    /// Make `window_size` fail.
    pub fn without_size(mut self) -> Self {
        self.size = None;
        self
    }

    pub fn probe(&self) -> FakeProbe {
        FakeProbe {
            state: Rc::clone(&self.state),
        }
    }
}

impl RawMode for FakeTerminal {
    type Saved = TermAttrs;

    fn enable(&mut self) -> Result<TermAttrs, TerminalError> {
        if self.fail_enable {
            return Err(TerminalError::enable(io::Error::other("no controlling terminal")));
        }
        let mut state = self.state.borrow_mut();
        state.enable_calls += 1;
        let saved = state.attrs;
        state.attrs = TermAttrs::raw();
        Ok(saved)
    }

    fn restore(&mut self, saved: TermAttrs) -> Result<(), TerminalError> {
        let mut state = self.state.borrow_mut();
        state.restore_calls += 1;
        state.attrs = saved;
        Ok(())
    }

    fn window_size(&self) -> Result<WindowSize, TerminalError> {
        self.size
            .ok_or_else(|| TerminalError::WindowSize(io::Error::other("no window")))
    }
}

/// Read-only view of a [`FakeTerminal`]'s attribute store.
#[derive(Debug, Clone)]
pub struct FakeProbe {
    state: Rc<RefCell<FakeState>>,
}

impl FakeProbe {
    pub fn attrs(&self) -> TermAttrs {
        self.state.borrow().attrs
    }

    pub fn enable_calls(&self) -> usize {
        self.state.borrow().enable_calls
    }

    pub fn restore_calls(&self) -> usize {
        self.state.borrow().restore_calls
    }
}
