//! Supervised server sessions.
//!
//! [`ServerSession`] owns one spawned child process through its full
//! lifecycle; [`monitor`] is the polling loop that watches it until
//! the child exits or the operator interrupts.
mod monitor;
mod session;

pub use monitor::{MonitorOutcome, monitor};
pub use session::{ServerSession, SessionId, SessionState};
