/*!
 # DraftDesk Launcher

 Supervises the locally spawned HTTP server behind the DraftDesk writing
 dashboard, from port acquisition through graceful shutdown.

 ## Overview

 One run of the launcher owns one server session:
 - Resolve a Python interpreter on `PATH` (fatal if none is found)
 - Reclaim the target TCP port from a stale listener, best-effort
 - Spawn the server process with suppressed stdio
 - Confirm it survived a fixed grace delay (fatal if it did not)
 - Open the system browser at the dashboard URL, best-effort
 - Poll liveness on a fixed interval, printing status lines, until the
   server exits or the operator interrupts
 - Terminate the child through a single idempotent shutdown path

 ## Basic Usage

 ```no_run
 use draftdesk_launcher::{RunOutcome, Supervisor, Config, Result};

 #[tokio::main]
 async fn main() -> Result<()> {
     let supervisor = Supervisor::new(Config::default());

     match supervisor.run("dashboard").await? {
         RunOutcome::Interrupted => println!("stopped cleanly"),
         RunOutcome::ServerExited => eprintln!("server ended unexpectedly"),
     }

     Ok(())
 }
 ```
*/

pub mod config;
pub mod error;
pub mod platform;
pub mod projects;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{MonitorOutcome, ServerSession, SessionId, SessionState};

use crate::config::validate_config;
use crate::projects::ProjectListing;
use std::path::Path;
use std::time::Duration;

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Clean operator-requested shutdown.
    Interrupted,
    /// The server process ended on its own while being monitored.
    ServerExited,
}

/// Owns the configuration and drives one supervised session at a time.
///
/// All public methods are instrumented with `tracing` spans.
pub struct Supervisor {
    /// Launch configuration
    config: Config,
}

impl Supervisor {
    /// Create a new supervisor from a configuration file path
    ///
    /// This method is instrumented with `tracing`.
    #[tracing::instrument(skip(path), fields(config_path = ?path.as_ref()))]
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        tracing::info!("loading configuration from file");
        let config = Config::from_file(path)?;
        Ok(Self::new(config))
    }

    /// Create a new supervisor from a configuration string
    ///
    /// This method is instrumented with `tracing`.
    #[tracing::instrument(skip(config))]
    pub fn from_config_str(config: &str) -> Result<Self> {
        tracing::info!("loading configuration from string");
        let config = Config::parse_from_str(config)?;
        Ok(Self::new(config))
    }

    /// Create a new supervisor from a configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Access the launch configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one full supervised session for the named launch profile.
    ///
    /// Blocks (asynchronously) until the server exits or the operator
    /// interrupts; either way the child is terminated exactly once
    /// before this returns. Startup failures return an error without
    /// ever reaching the monitor loop.
    ///
    /// This method is instrumented with `tracing`.
    #[tracing::instrument(skip(self), fields(profile = %profile_name))]
    pub async fn run(&self, profile_name: &str) -> Result<RunOutcome> {
        validate_config(&self.config)?;

        let profile = self
            .config
            .profiles
            .get(profile_name)
            .ok_or_else(|| Error::ProfileNotFound(profile_name.to_string()))?;

        let interpreter = platform::resolve_interpreter(&self.config.interpreters)?;

        // Creates the projects root if this is a fresh checkout.
        let listing = ProjectListing::scan(&self.config.projects_dir)?;
        tracing::info!(
            projects = listing.len(),
            dir = %self.config.projects_dir.display(),
            "projects directory ready"
        );

        platform::reclaim_port(
            profile.port,
            Duration::from_millis(self.config.timing.reclaim_settle_ms),
        )
        .await;

        let mut session = ServerSession::new(
            profile_name.to_string(),
            profile.port,
            interpreter,
            profile.args.clone(),
        );

        session.spawn()?;
        session
            .confirm_started(Duration::from_millis(self.config.timing.grace_delay_ms))
            .await?;

        let pid = session
            .pid()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "'{}' running on port {} (pid {})",
            profile_name, profile.port, pid
        );
        println!("Press Ctrl-C to stop.");

        platform::open_browser(&profile.url);

        let outcome = server::monitor(
            &mut session,
            Duration::from_secs(self.config.timing.status_interval_secs),
            &self.config.projects_dir,
        )
        .await;

        // Single exit path: the child is terminated whether the monitor
        // ended by interrupt, by child death, or with an error.
        session.shutdown().await?;

        match outcome? {
            MonitorOutcome::Interrupted => Ok(RunOutcome::Interrupted),
            MonitorOutcome::ServerExited => Ok(RunOutcome::ServerExited),
        }
    }
}
