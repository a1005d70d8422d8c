//! Run-configuration document.

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::types::{ManifestError, ManifestResult};

/// Parsed YAML run configuration. Keys are not validated at load time;
/// a missing or mistyped key surfaces when it is consumed.
#[derive(Debug, Clone)]
pub struct RunConfig {
    doc: Value,
}

impl RunConfig {
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc = serde_yaml::from_str(&raw).map_err(|e| ManifestError::Yaml {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { doc })
    }

    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    /// Typed access to one key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> ManifestResult<T> {
        let value = self
            .doc
            .get(key)
            .ok_or_else(|| ManifestError::MissingConfigKey {
                key: key.to_string(),
            })?;
        serde_yaml::from_value(value.clone()).map_err(|e| ManifestError::ConfigKeyType {
            key: key.to_string(),
            source: e,
        })
    }
}
