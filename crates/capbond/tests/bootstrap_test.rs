//! Bootstrap configuration and verification tests

use capbond::Registry;
use capbond::bootstrap::{BondingConfig, load_config, verify_required};
use capbond::providers::{MemoryMailTransport, RecordingChannel, RecordingPool};
use std::io::Write;
use std::sync::Arc;

#[test]
fn load_config_defaults_without_a_file() {
    let config = load_config(None).expect("defaults load");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.required.is_empty());
    assert!(config.channels.is_empty());
}

#[test]
fn load_config_reads_toml() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        r#"
required = ["database", "email"]
channels = ["webhook"]

[logging]
level = "debug"
json_format = true
"#
    )
    .expect("write config");

    let config = load_config(Some(file.path())).expect("config loads");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.required, ["database", "email"]);
    assert_eq!(config.channels, ["webhook"]);
}

#[test]
fn verify_required_names_every_gap() {
    let registry = Registry::new();
    let config = BondingConfig {
        required: vec!["database".to_string(), "email".to_string()],
        channels: vec!["webhook".to_string()],
        ..BondingConfig::default()
    };

    let err = verify_required(&registry, &config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("database"));
    assert!(message.contains("email"));
    assert!(message.contains("notifications:webhook"));

    // bond part of the surface: the error shrinks to the real gap
    registry.bond(
        "database",
        Arc::new(RecordingPool::new("primary")) as Arc<dyn capbond::ports::DatabasePool>,
    );
    let err = verify_required(&registry, &config).unwrap_err();
    let message = err.to_string();
    assert!(!message.contains("database"));
    assert!(message.contains("email"));

    // bond the rest: verification passes
    registry.bond(
        "email",
        Arc::new(MemoryMailTransport::new()) as Arc<dyn capbond::ports::MailTransport>,
    );
    registry.bond_named(
        "notifications",
        "webhook",
        Arc::new(RecordingChannel::new()) as Arc<dyn capbond::ports::NotificationChannel>,
    );
    verify_required(&registry, &config).expect("fully bonded");
}
