//! Platform capabilities the launcher depends on, all best-effort.
//!
//! Interpreter lookup, listener discovery, process termination, and
//! browser opening are thin wrappers over OS facilities that may be
//! absent. Apart from interpreter resolution, which is fatal when it
//! fails, every helper here degrades softly: a missing `lsof` means no
//! reclaim, a missing browser opener means a printed URL.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Probes `PATH` for the first usable interpreter, in preference order.
///
/// # Errors
///
/// Returns [`Error::EnvironmentMissing`] if none of the candidates
/// resolve. This is the launcher's first fatal check: nothing is
/// spawned and no port is touched before it passes.
pub fn resolve_interpreter(candidates: &[String]) -> Result<PathBuf> {
    for candidate in candidates {
        match which::which(candidate) {
            Ok(path) => {
                tracing::debug!(interpreter = %path.display(), "resolved interpreter");
                return Ok(path);
            }
            Err(e) => {
                tracing::trace!(candidate = %candidate, error = %e, "candidate not on PATH");
            }
        }
    }

    Err(Error::EnvironmentMissing(candidates.join(", ")))
}

/// Returns the PIDs of processes listening on `port`.
///
/// Uses `lsof` on unix. Anywhere the utility is unavailable or fails,
/// an empty list is returned and the reclaim step becomes a no-op; a
/// genuinely occupied port then surfaces later as a startup failure.
pub fn listener_pids(port: u16) -> Vec<u32> {
    #[cfg(unix)]
    {
        let output = std::process::Command::new("lsof")
            .args(["-ti", &format!("tcp:{}", port), "-sTCP:LISTEN"])
            .output();

        match output {
            Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
                .lines()
                .filter_map(|line| line.trim().parse().ok())
                .collect(),
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "lsof unavailable, skipping listener check");
                Vec::new()
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = port;
        Vec::new()
    }
}

/// Sends a termination signal to `pid`, ignoring failures.
///
/// SIGTERM on unix, `taskkill` on windows. The target may already be
/// gone, or may not be ours to signal; both are tolerated.
pub fn terminate(pid: u32) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
            tracing::debug!(pid, error = %e, "failed to signal process");
        }
    }

    #[cfg(windows)]
    {
        let _ = std::process::Command::new("taskkill")
            .args(["/PID", &pid.to_string()])
            .output();
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = pid;
    }
}

/// Best-effort reclaim of `port` from a stale listener.
///
/// Signals every process found listening on the port, then waits the
/// settle delay for the OS to release it. Success is not verified;
/// a listener that survives shows up as a startup failure when the new
/// child cannot bind.
pub async fn reclaim_port(port: u16, settle: Duration) {
    let own_pid = std::process::id();
    let pids: Vec<u32> = listener_pids(port)
        .into_iter()
        .filter(|pid| *pid != own_pid)
        .collect();

    if pids.is_empty() {
        tracing::debug!(port, "port appears free");
        return;
    }

    for pid in &pids {
        println!("Port {} is busy, stopping stale listener (pid {})", port, pid);
        tracing::info!(port, pid, "signaling stale listener");
        terminate(*pid);
    }

    tokio::time::sleep(settle).await;
}

/// Opens `url` in the system browser, best-effort.
///
/// Never fails the session: when no opener works, the URL is printed
/// for manual use and `false` is returned.
pub fn open_browser(url: &str) -> bool {
    match open::that(url) {
        Ok(()) => {
            tracing::info!(%url, "opened browser");
            true
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "could not open a browser");
            println!("Could not open a browser; visit {} manually.", url);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_interpreter_prefers_first_candidate() {
        // `sh` exists on every unix test host.
        #[cfg(unix)]
        {
            let candidates = vec!["sh".to_string(), "python3".to_string()];
            let path = resolve_interpreter(&candidates).unwrap();
            assert!(path.ends_with("sh"));
        }
    }

    #[test]
    fn resolve_interpreter_fails_when_nothing_matches() {
        let candidates = vec!["draftdesk-no-such-interpreter".to_string()];
        let err = resolve_interpreter(&candidates).unwrap_err();
        assert!(matches!(err, Error::EnvironmentMissing(_)));
        assert!(err.to_string().contains("draftdesk-no-such-interpreter"));
    }

    #[test]
    fn listener_pids_empty_for_unused_port() {
        // Port 1 requires root to bind; nothing should be listening.
        assert!(listener_pids(1).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn terminate_stops_a_process() {
        let mut child = std::process::Command::new("sleep")
            .arg("30")
            .spawn()
            .unwrap();

        terminate(child.id());

        let status = child.wait().unwrap();
        assert!(!status.success());
    }

    #[test]
    fn terminate_tolerates_missing_process() {
        // A PID from the far end of the range is almost certainly dead,
        // and the call must not panic either way.
        terminate(4_000_000);
    }
}
