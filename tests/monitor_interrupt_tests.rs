#![cfg(unix)]

// Kept in its own test binary: raising SIGINT is process-wide, and any
// other monitor running in the same process would observe it too.

use draftdesk_launcher::error::Result;
use draftdesk_launcher::server::{MonitorOutcome, ServerSession, SessionState, monitor};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::test]
async fn test_interrupt_stops_monitor_and_shutdown_releases_child() -> Result<()> {
    let projects = tempfile::tempdir().expect("tempdir");

    let mut session = ServerSession::new(
        "test".to_string(),
        8080,
        PathBuf::from("/bin/sh"),
        vec!["-c".to_string(), "sleep 30".to_string()],
    );
    session.spawn()?;
    session.confirm_started(Duration::from_millis(50)).await?;

    // Deliver SIGINT once the monitor is pending on its signal arm.
    let raiser = tokio::spawn(async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        nix::sys::signal::kill(nix::unistd::Pid::this(), nix::sys::signal::Signal::SIGINT)
            .expect("deliver SIGINT");
    });

    // A long tick interval: the only way out within the test timeout is
    // the interrupt arm.
    let outcome = monitor(&mut session, Duration::from_secs(30), projects.path()).await?;
    assert_eq!(outcome, MonitorOutcome::Interrupted);
    raiser.await.expect("raiser task");

    // One shutdown terminates the child; the handle is not alive after.
    session.shutdown().await?;
    assert_eq!(session.state(), SessionState::Stopped);
    assert!(!session.is_alive());

    // Idempotent: a second shutdown on the stopped session does not raise.
    session.shutdown().await?;

    Ok(())
}
