//! Configuration for the inspection CLI
//!
//! Settings are read from a YAML file. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use crate::error::{Error, Result};
use crate::request::GatewayRequest;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Output Format
// ============================================================================

/// How the CLI prints results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON
    #[default]
    Json,
    /// Human-readable text
    Pretty,
}

// ============================================================================
// Inspect Config
// ============================================================================

/// CLI configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Minimum log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Mask all but the last four characters of the TransArmor token
    #[serde(default = "default_mask_card_reference")]
    pub mask_card_reference: bool,

    /// Request context attached to decoded responses
    #[serde(default)]
    pub request: GatewayRequest,
}

fn default_mask_card_reference() -> bool {
    true
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
            mask_card_reference: default_mask_card_reference(),
            request: GatewayRequest::default(),
        }
    }
}

/// Load configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<InspectConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_config_from_str(&content)
}

/// Load configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<InspectConfig> {
    if yaml.trim().is_empty() {
        return Ok(InspectConfig::default());
    }
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))
}
