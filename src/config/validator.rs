use crate::config::{Config, ProfileConfig};
use crate::error::{Error, Result};

/// Validates a single launch profile.
pub fn validate_profile(name: &str, profile: &ProfileConfig) -> Result<()> {
    if profile.port == 0 {
        return Err(Error::ConfigInvalid(format!(
            "profile '{}' has port 0",
            name
        )));
    }

    if profile.args.is_empty() {
        return Err(Error::ConfigInvalid(format!(
            "profile '{}' has no server arguments",
            name
        )));
    }

    if profile.url.is_empty() {
        return Err(Error::ConfigInvalid(format!(
            "profile '{}' has an empty URL",
            name
        )));
    }

    Ok(())
}

/// Full configuration validation.
///
/// Two profiles sharing a port is deliberately allowed: running two
/// supervisors against the same port at once is a user error the design
/// does not defend against beyond the single reclaim attempt.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.profiles.is_empty() {
        return Err(Error::ConfigInvalid("no launch profiles configured".to_string()));
    }

    if !config.profiles.contains_key(&config.default_profile) {
        return Err(Error::ConfigInvalid(format!(
            "default profile '{}' is not configured",
            config.default_profile
        )));
    }

    if config.interpreters.is_empty() {
        return Err(Error::ConfigInvalid(
            "no interpreter candidates configured".to_string(),
        ));
    }

    for (name, profile) in &config.profiles {
        validate_profile(name, profile)?;
    }

    Ok(())
}
