//! Tilde runtime: the input dispatch loop and its shutdown path.
//!
//! The binary wires the loop to the real terminal; tests drive it with byte
//! slices, `Vec<u8>` output and `core_terminal::FakeTerminal`.

pub mod runtime;

pub use runtime::{EXIT_FAILURE, EditorRuntime, LoopState, ShutdownReason};
