use crate::error::{Error, Result};
use async_process::{Child, Command, Stdio};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a supervised session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    // Private constructor, only usable within our crate
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a supervised session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Child spawned, liveness not yet confirmed
    Starting,
    /// Liveness confirmed, monitor loop active
    Running,
    /// Termination in progress
    Stopping,
    /// Terminal state; the process handle has been released
    Stopped,
}

/// One supervised child-process lifetime.
///
/// The session exclusively owns the spawned process handle. At most one
/// session should hold a given port at a time; the launcher attempts to
/// reclaim the port from a stale listener before spawning, and a failed
/// reclaim surfaces as a startup failure rather than being retried.
///
/// Lifecycle: `Starting` on spawn, `Running` once [`confirm_started`]
/// succeeds, `Stopping` then `Stopped` via [`shutdown`]. A startup
/// failure moves straight from `Starting` to `Stopped`.
///
/// [`confirm_started`]: ServerSession::confirm_started
/// [`shutdown`]: ServerSession::shutdown
pub struct ServerSession {
    /// Name of the launch profile this session runs
    profile: String,
    /// Port the child must bind
    port: u16,
    /// Resolved interpreter executable
    program: PathBuf,
    /// Arguments passed to the interpreter
    args: Vec<String>,
    /// Session ID
    id: SessionId,
    /// Child process, exclusively owned
    child: Option<Child>,
    /// Session state
    state: SessionState,
}

impl ServerSession {
    /// Create a new session; nothing is spawned yet.
    pub fn new(profile: String, port: u16, program: PathBuf, args: Vec<String>) -> Self {
        Self {
            profile,
            port,
            program,
            args,
            id: SessionId::new(),
            child: None,
            state: SessionState::Stopped,
        }
    }

    /// Get the session ID
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Get the launch profile name
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Get the port the child must bind
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the child process ID, if a child is held
    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(|c| c.id())
    }

    /// Spawn the server process.
    ///
    /// Stdio is suppressed, not captured: the launcher reports coarse
    /// status only, never child output.
    pub fn spawn(&mut self) -> Result<()> {
        if self.child.is_some() {
            return Err(Error::AlreadyRunning);
        }

        self.state = SessionState::Starting;

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let child = match spawned {
            Ok(child) => child,
            Err(e) => {
                self.state = SessionState::Stopped;
                return Err(Error::Process(format!(
                    "failed to spawn {}: {}",
                    self.program.display(),
                    e
                )));
            }
        };

        tracing::info!(session = %self.id, pid = child.id(), "spawned server process");
        self.child = Some(child);

        Ok(())
    }

    /// Non-invasive liveness check of the process handle.
    ///
    /// Signal-zero style: asks the OS whether the handle still denotes
    /// a running process. Not a network probe.
    pub fn is_alive(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_status(), Ok(None)),
            None => false,
        }
    }

    /// Wait out the grace delay, then confirm the child survived startup.
    ///
    /// On success the session transitions to `Running`. If the child has
    /// already exited the session goes straight to `Stopped` and a
    /// [`Error::StartupFailed`] is returned; a port that stayed occupied
    /// after the reclaim attempt shows up here.
    pub async fn confirm_started(&mut self, grace: Duration) -> Result<()> {
        tokio::time::sleep(grace).await;

        if self.is_alive() {
            self.state = SessionState::Running;
            tracing::info!(session = %self.id, "server confirmed alive");
            Ok(())
        } else {
            self.state = SessionState::Stopped;
            self.child = None;
            Err(Error::StartupFailed(format!(
                "'{}' exited within {}ms of spawn; port {} may still be in use",
                self.profile,
                grace.as_millis(),
                self.port
            )))
        }
    }

    /// Terminate the child and release the handle.
    ///
    /// Idempotent single exit path for both the interrupt handler and
    /// the end of the monitor loop: an already-gone child is tolerated
    /// and a second call on a stopped session returns `Ok` immediately.
    pub async fn shutdown(&mut self) -> Result<()> {
        let Some(mut child) = self.child.take() else {
            self.state = SessionState::Stopped;
            return Ok(());
        };

        self.state = SessionState::Stopping;
        tracing::info!(session = %self.id, pid = child.id(), "stopping server process");

        if let Err(e) = child.kill() {
            // Already exited on its own; reaping below still applies.
            tracing::debug!(session = %self.id, error = %e, "kill failed, child likely gone");
        }

        let _ = child.status().await;
        self.state = SessionState::Stopped;

        Ok(())
    }
}
