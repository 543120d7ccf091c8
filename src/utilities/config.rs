//! Catalogue configuration.
//!
//! ```yaml
//! search_paths: ["protocols", "/etc/protocols"]
//! aliases:
//!   SupportsIndex: IntConvertible
//! allow_redeclaration: false
//! include_standard: true
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utilities::errors::RegistryError;

/// Settings for building a [`CapabilityRegistry`](crate::CapabilityRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Directories searched for protocol YAML files.
    pub search_paths: Vec<PathBuf>,
    /// Extra names mapped to canonical protocol names.
    pub aliases: HashMap<String, String>,
    /// Replace a conflicting declaration instead of rejecting it.
    pub allow_redeclaration: bool,
    /// Seed the registry with the six builtin declarations.
    pub include_standard: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from("protocols")],
            aliases: HashMap::new(),
            allow_redeclaration: false,
            include_standard: true,
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Apply a map of overrides on top of this configuration.
    ///
    /// Keys present in `overrides` replace the current value; everything
    /// else is kept.
    pub fn merged_with(&self, overrides: &HashMap<String, Value>) -> Result<Self, RegistryError> {
        let base: HashMap<String, Value> = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            Ok(_) => HashMap::new(),
            Err(e) => return Err(RegistryError::Validation(e.to_string())),
        };
        let merged = process_config(&base, overrides);
        let value = Value::Object(merged.into_iter().collect());
        serde_json::from_value(value).map_err(|e| RegistryError::Validation(e.to_string()))
    }
}

/// Merge a configuration map with defaults, overrides winning.
pub fn process_config(
    defaults: &HashMap<String, Value>,
    overrides: &HashMap<String, Value>,
) -> HashMap<String, Value> {
    let mut result = defaults.clone();
    for (key, value) in overrides {
        result.insert(key.clone(), value.clone());
    }
    result
}
