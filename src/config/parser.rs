use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configuration for a single launch profile.
///
/// A profile names one supervisable server: the TCP port it must bind,
/// the arguments passed to the resolved interpreter, and the URL the
/// launcher opens in the browser once the server is confirmed alive.
///
/// # Examples
///
/// ```
/// use draftdesk_launcher::config::ProfileConfig;
///
/// let profile = ProfileConfig {
///     port: 8080,
///     args: vec!["-m".to_string(), "http.server".to_string(), "8080".to_string()],
///     url: "http://localhost:8080/dashboard.html".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// TCP port the server binds. Used for the reclaim step and for
    /// status reporting; the launcher itself never binds it.
    pub port: u16,

    /// Arguments passed to the resolved interpreter.
    pub args: Vec<String>,

    /// URL opened in the system browser after startup is confirmed.
    pub url: String,
}

/// The three fixed waits of a supervised session.
///
/// All three are plain blocking sleeps: there is nothing else for the
/// supervisor to do concurrently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingConfig {
    /// Delay after signaling a stale listener, before spawning the child.
    #[serde(default = "default_reclaim_settle_ms")]
    pub reclaim_settle_ms: u64,

    /// Delay between spawning the child and the startup liveness check.
    #[serde(default = "default_grace_delay_ms")]
    pub grace_delay_ms: u64,

    /// Interval between monitor-loop status lines.
    #[serde(default = "default_status_interval_secs")]
    pub status_interval_secs: u64,
}

fn default_reclaim_settle_ms() -> u64 {
    1000
}

fn default_grace_delay_ms() -> u64 {
    2000
}

fn default_status_interval_secs() -> u64 {
    30
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reclaim_settle_ms: default_reclaim_settle_ms(),
            grace_delay_ms: default_grace_delay_ms(),
            status_interval_secs: default_status_interval_secs(),
        }
    }
}

/// Main configuration for the DraftDesk launcher.
///
/// # JSON Schema
///
/// ```json
/// {
///   "profiles": {
///     "dashboard": {
///       "port": 8080,
///       "args": ["-m", "http.server", "8080"],
///       "url": "http://localhost:8080/dashboard.html"
///     },
///     "api": {
///       "port": 5003,
///       "args": ["modern_api.py"],
///       "url": "http://localhost:5003"
///     }
///   },
///   "defaultProfile": "dashboard",
///   "projectsDir": "projects",
///   "interpreters": ["python3", "python"],
///   "timing": {
///     "reclaimSettleMs": 1000,
///     "graceDelayMs": 2000,
///     "statusIntervalSecs": 30
///   }
/// }
/// ```
///
/// Everything except `profiles` has a default, and [`Config::default`]
/// provides the built-in profiles, so a configuration file is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Map of profile names to their launch configuration.
    pub profiles: HashMap<String, ProfileConfig>,

    /// Profile used when the launcher is invoked with no arguments.
    #[serde(default = "default_profile_name")]
    pub default_profile: String,

    /// Root directory scanned for writing projects in status lines.
    /// Created (empty) if absent.
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,

    /// Interpreter candidates probed on `PATH`, in preference order.
    #[serde(default = "default_interpreters")]
    pub interpreters: Vec<String>,

    /// Fixed delays and intervals for the supervised session.
    #[serde(default)]
    pub timing: TimingConfig,
}

fn default_profile_name() -> String {
    "dashboard".to_string()
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from("projects")
}

fn default_interpreters() -> Vec<String> {
    vec!["python3".to_string(), "python".to_string()]
}

impl Default for Config {
    /// The built-in configuration: the static dashboard file server on
    /// port 8080 and the project API server on port 5003.
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "dashboard".to_string(),
            ProfileConfig {
                port: 8080,
                args: vec![
                    "-m".to_string(),
                    "http.server".to_string(),
                    "8080".to_string(),
                ],
                url: "http://localhost:8080/dashboard.html".to_string(),
            },
        );
        profiles.insert(
            "api".to_string(),
            ProfileConfig {
                port: 5003,
                args: vec!["modern_api.py".to_string()],
                url: "http://localhost:5003".to_string(),
            },
        );

        Self {
            profiles,
            default_profile: default_profile_name(),
            projects_dir: default_projects_dir(),
            interpreters: default_interpreters(),
            timing: TimingConfig::default(),
        }
    }
}

impl Config {
    /// Loads a configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The file cannot be read
    /// * The file contents are not valid JSON
    /// * The JSON does not conform to the expected schema
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigParse(format!("failed to read config file: {}", e)))?;

        Self::parse_from_str(&content)
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid JSON or does not
    /// conform to the expected schema.
    pub fn parse_from_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::ConfigParse(format!("failed to parse JSON config: {}", e)))
    }
}
