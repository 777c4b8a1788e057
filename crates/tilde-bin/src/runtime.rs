//! Input dispatch loop.
//!
//! Each iteration while `Running`: render and flush one frame, block on the
//! next key, dispatch it. The quit key clears the screen, restores the
//! terminal and moves the loop to `Terminated`; nothing else ends it.
//!
//! Read failures are reported and retried until `EditorConfig::max_read_errors`
//! consecutive failures have been seen, at which point `run` returns the
//! error. Any error return leaves terminal restoration to the
//! `RawModeGuard` drop.

use anyhow::{Context, Result};
use core_actions::dispatch_key;
use core_input::{InputError, KeyDecoder};
use core_render::{render_exit, render_frame};
use core_state::{EditorConfig, EditorState};
use core_terminal::{RawMode, RawModeGuard};
use std::fmt;
use std::io::{Read, Write};
use tracing::{info, trace, warn};

/// Process exit status for unrecoverable failures.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The user pressed the quit key.
    Quit,
}

impl ShutdownReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Quit => "quit",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ShutdownReason::Quit => 0,
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn log_shutdown_stage(reason: ShutdownReason, stage: &'static str) {
    info!(
        target: "runtime.shutdown",
        reason = reason.as_str(),
        stage = stage,
        "shutdown_stage"
    );
}

pub struct EditorRuntime<R, W, T: RawMode> {
    decoder: KeyDecoder<R>,
    out: W,
    guard: RawModeGuard<T>,
    state: EditorState,
    config: EditorConfig,
    loop_state: LoopState,
    read_failures: u32,
}

impl<R: Read, W: Write, T: RawMode> EditorRuntime<R, W, T> {
    /// Enter raw mode on `terminal`, then size the screen from it.
    ///
    /// A sizing failure drops the guard, so the terminal is restored before
    /// the error reaches the caller.
    pub fn start(terminal: T, input: R, out: W, config: EditorConfig) -> Result<Self> {
        let guard = RawModeGuard::acquire(terminal).context("enable raw mode")?;
        let size = guard.window_size().context("query window size")?;
        let state = EditorState::new(usize::from(size.cols), usize::from(size.rows))
            .context("query window size")?;
        info!(target: "runtime", cols = size.cols, rows = size.rows, "startup");
        Ok(Self {
            decoder: KeyDecoder::new(input),
            out,
            guard,
            state,
            config,
            loop_state: LoopState::Running,
            read_failures: 0,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until the quit key is pressed.
    pub fn run(&mut self) -> Result<ShutdownReason> {
        let span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter = span.enter();
        loop {
            if let Some(reason) = self.step()? {
                return Ok(reason);
            }
        }
    }

    /// One loop iteration. Returns the shutdown reason once terminated.
    pub fn step(&mut self) -> Result<Option<ShutdownReason>> {
        if self.loop_state == LoopState::Terminated {
            return Ok(Some(ShutdownReason::Quit));
        }
        self.refresh_screen()?;

        let key = match self.decoder.read_key() {
            Ok(key) => {
                self.read_failures = 0;
                key
            }
            Err(err) => {
                self.on_read_error(err)?;
                return Ok(None);
            }
        };

        let result = dispatch_key(key, &mut self.state);
        if result.quit {
            self.shutdown(ShutdownReason::Quit)?;
            return Ok(Some(ShutdownReason::Quit));
        }
        trace!(target: "runtime", %key, dirty = result.dirty, "key_dispatched");
        Ok(None)
    }

    fn refresh_screen(&mut self) -> Result<()> {
        self.state.clamp_cursor();
        let mut frame = render_frame(&self.state, &self.config)?;
        let bytes = frame.flush_to(&mut self.out).context("flush frame")?;
        trace!(target: "render", bytes, "frame_flushed");
        Ok(())
    }

    fn on_read_error(&mut self, err: InputError) -> Result<()> {
        self.read_failures = self.read_failures.saturating_add(1);
        let closed = matches!(err, InputError::Eof);
        let err = anyhow::Error::new(err);
        warn!(
            target: "input",
            err = %format!("{err:#}"),
            consecutive = self.read_failures,
            closed,
            "input_read_error"
        );
        // Raw mode has no output post-processing, hence the explicit CR.
        eprint!("\r\nerror reading key: {err:#}\r\n");
        // A closed stdin never yields another key, whatever the budget says.
        if closed {
            return Err(err.context("read key"));
        }
        if self.config.read_errors_exhausted(self.read_failures) {
            let failures = self.read_failures;
            return Err(err.context(format!("read key ({failures} consecutive failures)")));
        }
        Ok(())
    }

    fn shutdown(&mut self, reason: ShutdownReason) -> Result<()> {
        log_shutdown_stage(reason, "begin");
        let cleared = render_exit().and_then(|mut buf| Ok(buf.flush_to(&mut self.out)?));
        let restored = self.guard.restore();
        self.loop_state = LoopState::Terminated;
        log_shutdown_stage(reason, "complete");
        restored.context("restore terminal mode")?;
        cleared.context("clear screen on exit")?;
        Ok(())
    }
}
