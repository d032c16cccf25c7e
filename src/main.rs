use draftdesk_launcher::{Config, RunOutcome, Supervisor};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Optional configuration file, looked up in the working directory.
const CONFIG_FILE: &str = "draftdesk.json";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = if Path::new(CONFIG_FILE).is_file() {
        match Config::from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        Config::default()
    };

    // The only argument is an optional launch-profile name; the default
    // invocation takes none.
    let profile = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.default_profile.clone());

    let supervisor = Supervisor::new(config);

    match supervisor.run(&profile).await {
        Ok(RunOutcome::Interrupted) => {
            println!("Server stopped. Goodbye.");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::ServerExited) => {
            eprintln!("error: server ended unexpectedly; check the port and try again");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
