use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sizing::SizeValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Settings for a single database provisioning run
///
/// Mirrors the settings document handed to the downstream provisioning
/// workflow: instance, database identity and drives, per-file sizes, and
/// optional operator-supplied free-space figures per drive letter.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Target SQL Server instance, recorded in the plan for the operator
    pub sql_instance: String,
    pub database: DatabaseConfig,
    pub file_sizes: FileSizesConfig,
    /// Free space per drive letter; drives without a figure are not validated
    #[serde(default)]
    pub available_space: BTreeMap<String, SizeValue>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub name: String,
    /// Drive letter holding the data files (e.g. "G")
    pub data_drive: String,
    /// Drive letter holding the log file (e.g. "L")
    pub log_drive: String,
    pub expected_size: SizeValue,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileSizesConfig {
    /// Initial size of each data file
    pub data_size: SizeValue,
    /// Autogrowth increment for data files
    pub data_growth: SizeValue,
    /// Initial size of the log file
    pub log_size: SizeValue,
    /// Autogrowth increment for the log file
    pub log_growth: SizeValue,
    /// Maximum size per data file before another file is allocated
    pub threshold: SizeValue,
}

impl PlanConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database.name.trim().is_empty() {
            bail!("database name must not be empty");
        }
        validate_drive_letter(&self.database.data_drive)
            .context("invalid database.data_drive")?;
        validate_drive_letter(&self.database.log_drive).context("invalid database.log_drive")?;
        for drive in self.available_space.keys() {
            validate_drive_letter(drive)
                .with_context(|| format!("invalid drive '{drive}' in available_space"))?;
        }
        Ok(())
    }
}

/// Drives are addressed by a single letter, as in "G" or "L"
fn validate_drive_letter(drive: &str) -> Result<()> {
    let mut chars = drive.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(()),
        _ => bail!("'{drive}' is not a drive letter"),
    }
}
