//! Host bootstrap helpers
//!
//! A hosting application bonds its providers, loads a [`BondingConfig`] and
//! calls [`verify_required`] so that a missing capability surfaces as one
//! configuration error at startup instead of a scattered runtime failure.

use capbond_capabilities::notifications;
use capbond_domain::error::{Error, Result};
use capbond_registry::Registry;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Logging settings, consumed by [`crate::logging::init_logging`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted log lines instead of human-readable ones
    #[serde(default)]
    pub json_format: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

/// Host-side bonding expectations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BondingConfig {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Capability categories that must be singleton-bonded at startup
    #[serde(default)]
    pub required: Vec<String>,
    /// Channel names that must be bonded under `"notifications"`
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Load the bonding configuration
///
/// Merge order: the TOML file (when given), then `CAPBOND_`-prefixed
/// environment variables (`CAPBOND_LOGGING__LEVEL=debug` overrides
/// `[logging] level`).
pub fn load_config(path: Option<&Path>) -> Result<BondingConfig> {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Toml::file(path));
    }
    figment
        .merge(Env::prefixed("CAPBOND_").split("__"))
        .extract()
        .map_err(|e| Error::configuration_with_source("failed to load bonding config", e))
}

/// Verify that everything the config requires is bonded on `registry`
///
/// Collects every missing entry before failing, so one startup error names
/// the whole gap rather than the first hole found.
pub fn verify_required(registry: &Registry, config: &BondingConfig) -> Result<()> {
    let mut missing = Vec::new();
    for category in &config.required {
        if !registry.is_bonded(category) {
            missing.push(category.clone());
        }
    }
    for name in &config.channels {
        if !registry.is_bonded_named(notifications::CATEGORY, name) {
            missing.push(format!("{}:{name}", notifications::CATEGORY));
        }
    }

    if missing.is_empty() {
        info!(
            required = config.required.len(),
            channels = config.channels.len(),
            "all required capabilities bonded"
        );
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "required capabilities not bonded: {}",
            missing.join(", ")
        )))
    }
}

/// [`verify_required`] against the process-wide default registry
pub fn verify_required_global(config: &BondingConfig) -> Result<()> {
    verify_required(capbond_registry::global(), config)
}
