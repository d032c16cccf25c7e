use draftdesk_launcher::config::{Config, ProfileConfig, validate_config};
use draftdesk_launcher::error::{Error, Result};

#[test]
fn test_parse_config() -> Result<()> {
    let config_str = r#"{
        "profiles": {
            "dashboard": {
                "port": 8080,
                "args": ["-m", "http.server", "8080"],
                "url": "http://localhost:8080/dashboard.html"
            },
            "api": {
                "port": 5003,
                "args": ["modern_api.py"],
                "url": "http://localhost:5003"
            }
        },
        "defaultProfile": "api",
        "projectsDir": "my_projects",
        "interpreters": ["python3.12", "python3"]
    }"#;

    let config = Config::parse_from_str(config_str)?;

    assert_eq!(config.profiles.len(), 2);
    assert!(config.profiles.contains_key("dashboard"));
    assert!(config.profiles.contains_key("api"));

    let dash = &config.profiles["dashboard"];
    assert_eq!(dash.port, 8080);
    assert_eq!(dash.args, vec!["-m", "http.server", "8080"]);
    assert_eq!(dash.url, "http://localhost:8080/dashboard.html");

    assert_eq!(config.default_profile, "api");
    assert_eq!(config.projects_dir.to_str(), Some("my_projects"));
    assert_eq!(config.interpreters, vec!["python3.12", "python3"]);

    // Timing was omitted entirely, so every knob is a default.
    assert_eq!(config.timing.reclaim_settle_ms, 1000);
    assert_eq!(config.timing.grace_delay_ms, 2000);
    assert_eq!(config.timing.status_interval_secs, 30);

    Ok(())
}

#[test]
fn test_parse_rejects_malformed_json() {
    let result = Config::parse_from_str("{ not json");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn test_validate_default_config() -> Result<()> {
    validate_config(&Config::default())
}

#[test]
fn test_validate_rejects_empty_profiles() {
    let mut config = Config::default();
    config.profiles.clear();

    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigInvalid(_))
    ));
}

#[test]
fn test_validate_rejects_unknown_default_profile() {
    let mut config = Config::default();
    config.default_profile = "missing".to_string();

    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigInvalid(_))
    ));
}

#[test]
fn test_validate_rejects_bad_profile_values() {
    let mut config = Config::default();
    config.profiles.insert(
        "broken".to_string(),
        ProfileConfig {
            port: 0,
            args: vec!["-m".to_string(), "http.server".to_string()],
            url: "http://localhost:0".to_string(),
        },
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigInvalid(_))
    ));

    let mut config = Config::default();
    config.profiles.insert(
        "broken".to_string(),
        ProfileConfig {
            port: 9000,
            args: vec![],
            url: "http://localhost:9000".to_string(),
        },
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigInvalid(_))
    ));

    let mut config = Config::default();
    config.profiles.insert(
        "broken".to_string(),
        ProfileConfig {
            port: 9000,
            args: vec!["server.py".to_string()],
            url: String::new(),
        },
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigInvalid(_))
    ));
}

#[test]
fn test_validate_rejects_empty_interpreter_list() {
    let mut config = Config::default();
    config.interpreters.clear();

    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigInvalid(_))
    ));
}
