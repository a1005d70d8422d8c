//! Per-tile metadata lookup table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::encode::encode_patch;
use crate::types::{ManifestError, ManifestResult, PatchMetadata};

/// JSON lookup table mapping image stem (file name without extension) to
/// its acquisition record. Loaded once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct MetadataLookup {
    records: HashMap<String, PatchMetadata>,
}

impl MetadataLookup {
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let raw = fs::read(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let records = serde_json::from_slice(&raw).map_err(|e| ManifestError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { records })
    }

    pub fn get(&self, stem: &str) -> ManifestResult<&PatchMetadata> {
        self.records
            .get(stem)
            .ok_or_else(|| ManifestError::MissingMetadata {
                stem: stem.to_string(),
            })
    }

    /// Feature vector for one image stem. A missing record is fatal.
    pub fn encode_for(&self, stem: &str) -> ManifestResult<Vec<f32>> {
        encode_patch(self.get(stem)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// File name without its extension, as used to key the lookup table.
pub fn image_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
