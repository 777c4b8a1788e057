//! Terminal restoration on SIGTERM, SIGHUP and SIGINT.
//!
//! A signal that terminates the process skips every destructor, so
//! [`RawModeGuard`](crate::RawModeGuard) never gets to run. A dedicated
//! thread waits for the first handled signal, puts the line discipline back
//! and exits with the conventional `128 + signal` status.

use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};
use std::io;
use std::thread::{self, JoinHandle};
use tracing::{error, info};

pub const HANDLED_SIGNALS: [i32; 3] = [SIGTERM, SIGHUP, SIGINT];

/// Keeps the signal thread alive; dropping it unregisters the handlers.
pub struct SignalRestore {
    handle: Handle,
    worker: Option<JoinHandle<()>>,
}

impl SignalRestore {
    pub fn install<F>(restore: F) -> io::Result<Self>
    where
        F: FnOnce() -> io::Result<()> + Send + 'static,
    {
        let mut signals = Signals::new(HANDLED_SIGNALS)?;
        let handle = signals.handle();
        let worker = thread::Builder::new()
            .name("signal-restore".into())
            .spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    std::process::exit(restore_for_signal(signal, restore));
                }
            })?;
        Ok(Self {
            handle,
            worker: Some(worker),
        })
    }

    /// Restore cooked mode through crossterm, which remembers the attributes
    /// it replaced when raw mode was enabled.
    pub fn crossterm() -> io::Result<Self> {
        Self::install(crossterm::terminal::disable_raw_mode)
    }
}

impl Drop for SignalRestore {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Run `restore` for `signal` and return the exit status to terminate with.
pub fn restore_for_signal<F>(signal: i32, restore: F) -> i32
where
    F: FnOnce() -> io::Result<()>,
{
    match restore() {
        Ok(()) => info!(target: "terminal", signal, "signal_restore"),
        Err(err) => error!(target: "terminal", signal, %err, "signal_restore_failed"),
    }
    128 + signal
}
