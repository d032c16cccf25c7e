//! Configuration module for the DraftDesk launcher.
//!
//! Launch profiles describe the servers the launcher knows how to
//! supervise: which port they bind, which arguments the resolved
//! interpreter is started with, and which URL to open in the browser.
//! Configurations load from JSON files or strings; when no file is
//! present the built-in defaults (the static dashboard server and the
//! project API server) are used.
//!
//! # Examples
//!
//! Loading a configuration from a file:
//!
//! ```no_run
//! use draftdesk_launcher::config::Config;
//!
//! let config = Config::from_file("draftdesk.json").unwrap();
//! println!("{} launch profiles", config.profiles.len());
//! ```
mod parser;
pub mod validator;

pub use parser::{Config, ProfileConfig, TimingConfig};
pub use validator::validate_config;
