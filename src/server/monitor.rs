use crate::error::{Error, Result};
use crate::projects::ProjectListing;
use crate::server::ServerSession;
use std::path::Path;
use std::time::Duration;

/// Why the monitor loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorOutcome {
    /// The operator interrupted the launcher (Ctrl-C).
    Interrupted,
    /// The server process disappeared on its own.
    ServerExited,
}

/// The launcher's steady state: a plain timed loop.
///
/// Each tick checks whether the process handle is still alive and, if
/// so, prints one status line (timestamp, project counts recomputed
/// from disk, child PID). The loop ends when the child disappears or
/// when an interrupt arrives; the tick interval bounds how quickly a
/// silent child death is noticed.
///
/// The caller owns shutdown: this function only observes.
pub async fn monitor(
    session: &mut ServerSession,
    interval: Duration,
    projects_dir: &Path,
) -> Result<MonitorOutcome> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately; consume it so status lines
    // start one full interval after liveness was confirmed.
    ticker.tick().await;

    loop {
        tokio::select! {
            signal = &mut ctrl_c => {
                if let Err(e) = signal {
                    return Err(Error::Process(format!(
                        "failed to listen for interrupt: {}",
                        e
                    )));
                }
                tracing::info!("interrupt received");
                return Ok(MonitorOutcome::Interrupted);
            }
            _ = ticker.tick() => {
                if !session.is_alive() {
                    tracing::warn!(session = %session.id(), "server process disappeared");
                    return Ok(MonitorOutcome::ServerExited);
                }
                print_status(session, projects_dir);
            }
        }
    }
}

/// One status line per tick. Project counts are recomputed on every
/// call; nothing is cached.
fn print_status(session: &ServerSession, projects_dir: &Path) {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let pid = session
        .pid()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());

    match ProjectListing::scan(projects_dir) {
        Ok(listing) => println!(
            "[{}] '{}' serving on port {} | {} projects ({} with database) | pid {}",
            stamp,
            session.profile(),
            session.port(),
            listing.len(),
            listing.with_database(),
            pid
        ),
        Err(e) => println!(
            "[{}] '{}' serving on port {} | projects unavailable: {} | pid {}",
            stamp,
            session.profile(),
            session.port(),
            e,
            pid
        ),
    }
}
