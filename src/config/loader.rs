//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! rule set from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionMetadata, TaxConstants};

/// Loads and provides access to a payroll rule set.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the immutable [`TaxConstants`] value consumed by the engine.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kz2026/
/// ├── jurisdiction.yaml    # Jurisdiction metadata
/// └── tax_constants.yaml   # Rates, deduction, tax schedule, solver tuning
/// ```
///
/// # Example
///
/// ```no_run
/// use quote_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kz2026").unwrap();
/// println!("Rule set: {}", loader.jurisdiction().name);
/// println!("MRP: {}", loader.constants().base_unit_value);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    jurisdiction: JurisdictionMetadata,
    constants: TaxConstants,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kz2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let jurisdiction = Self::load_yaml::<JurisdictionMetadata>(&jurisdiction_path)?;

        let constants_path = path.join("tax_constants.yaml");
        let constants = Self::load_yaml::<TaxConstants>(&constants_path)?;

        Ok(Self {
            jurisdiction,
            constants,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.jurisdiction
    }

    /// Returns the loaded constants table.
    pub fn constants(&self) -> &TaxConstants {
        &self.constants
    }

    /// Consumes the loader and returns the constants table.
    pub fn into_constants(self) -> TaxConstants {
        self.constants
    }
}
