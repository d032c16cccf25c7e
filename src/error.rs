/// Error handling module for the DraftDesk launcher.
///
/// The launcher favors fast, visible failure over silent recovery: every
/// fatal condition is detected at the outermost supervising level and
/// produces a distinct, human-readable diagnostic before the process exits.
/// Non-fatal conditions (a browser that cannot be opened, a port reclaim
/// that finds nothing to signal) degrade to informational output and are
/// deliberately not represented here.
use thiserror::Error;

/// Errors that can occur while supervising a dashboard server.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to parse configuration from a file or string.
    ///
    /// This error occurs when:
    /// - The configuration file cannot be read
    /// - The configuration JSON is malformed
    /// - Field types are incorrect
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration is valid JSON but contains invalid values.
    ///
    /// This error occurs when:
    /// - No launch profiles are configured
    /// - A profile has a zero port, an empty URL, or no server arguments
    /// - The default profile does not name a configured profile
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    /// No usable interpreter could be resolved on `PATH`.
    ///
    /// Fatal: the launcher exits with a non-zero status before attempting
    /// to reclaim a port or spawn anything.
    #[error("no usable interpreter found (tried: {0})")]
    EnvironmentMissing(String),

    /// The server process was not alive after the startup grace delay.
    ///
    /// This is also how an unrecoverable port conflict surfaces: the
    /// reclaim step is best-effort, so a child that fails to bind exits
    /// during the grace delay and is reported here.
    #[error("server failed to start: {0}")]
    StartupFailed(String),

    /// Error spawning, signaling, or reaping the server process.
    #[error("server process error: {0}")]
    Process(String),

    /// The requested launch profile is not in the configuration.
    #[error("unknown launch profile: {0}")]
    ProfileNotFound(String),

    /// A session already holds a spawned server process.
    #[error("already running")]
    AlreadyRunning,

    /// Any other error not covered by the above categories.
    #[error("{0}")]
    Other(String),
}

/// Result type for launcher operations.
pub type Result<T> = std::result::Result<T, Error>;
