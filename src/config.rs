//! Configuration file support for plugin-osv-filter.
//!
//! Provides YAML-based configuration passed with `--config`: data
//! structures, file loading, and validation.
//!
//! Config is only ever read from the path the operator names. Files shipped
//! inside the plugin under validation are never picked up.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::dependency_attribution::policies::{SuppressedPackage, SuppressionList};
use crate::shared::security::read_regular_file;
use crate::shared::Result;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub suppressed_packages: Option<Vec<SuppressedPackageEntry>>,
    pub fail_on_findings: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// A reviewed `name@version` finding to drop.
#[derive(Debug, Deserialize)]
pub struct SuppressedPackageEntry {
    pub package: String,
    pub reason: Option<String>,
}

impl ConfigFile {
    /// The built-in suppression list extended with this file's entries
    pub fn suppression_list(&self) -> Result<SuppressionList> {
        let entries = self
            .suppressed_packages
            .iter()
            .flatten()
            .map(|entry| SuppressedPackage::parse(&entry.package, entry.reason.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(SuppressionList::builtin().extend(entries))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (i, entry) in config.suppressed_packages.iter().flatten().enumerate() {
        if let Err(e) = SuppressedPackage::parse(&entry.package, None) {
            bail!(
                "Invalid config: suppressed_packages[{}].package: {}\n\n\
                 💡 Hint: Each entry must name an exact version (e.g., \"minimist@1.2.5\").",
                i,
                e
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
