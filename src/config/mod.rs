//! Configuration management for sigwarden
//!
//! Supports loading the policy configuration from:
//! - Environment variables (SIGWARDEN_*)
//! - Config file (config.toml)
//! - A plain JSON policy file managed by the host

use crate::errors::{Result, SigwardenError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Verdict applied to request kinds no explicit rule covers.
///
/// The historical ruleset approves anything it does not recognize, so `Open`
/// is the default. Hosts that want unrecognized request kinds rejected opt
/// into `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// Approve request kinds with no explicit rule (fail-open).
    #[default]
    Open,
    /// Reject request kinds with no explicit rule (fail-closed).
    Closed,
}

/// Policy configuration
///
/// Loaded once at process start by the host and treated as immutable for the
/// lifetime of the evaluator built from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Chain ids for which transaction signing is auto-approved
    #[serde(default)]
    pub allowed_chain_ids: Vec<u64>,

    /// Verdict for request kinds with no explicit rule
    #[serde(default)]
    pub fallback: FallbackMode,
}

impl PolicyConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Start with defaults
        builder = builder.add_source(config::Config::try_from(&PolicyConfig::default()).unwrap());

        // Load from file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        } else {
            // Try default locations
            builder = builder
                .add_source(config::File::with_name("sigwarden").required(false))
                .add_source(config::File::with_name("/etc/sigwarden/config").required(false));
        }

        // Load from environment (SIGWARDEN_FALLBACK, etc.)
        builder = builder.add_source(
            config::Environment::with_prefix("SIGWARDEN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| SigwardenError::ConfigError(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| SigwardenError::ConfigError(e.to_string()))
    }

    /// Load from a JSON policy file
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Policy file {:?} does not exist, using defaults", path);
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| SigwardenError::ConfigError(e.to_string()))
    }

    /// Save to a JSON policy file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for &chain_id in &self.allowed_chain_ids {
            if !seen.insert(chain_id) {
                return Err(SigwardenError::DuplicateChainId(chain_id));
            }
        }

        // An empty allow-list rejects every transaction; legal, but worth a
        // heads-up since it usually means a missing config file.
        if self.allowed_chain_ids.is_empty() {
            warn!("Chain allow-list is empty, all transaction requests will be rejected");
        }

        Ok(())
    }
}
