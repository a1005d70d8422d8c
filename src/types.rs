//! Core types and error definitions for manifest construction.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type ManifestResult<T> = Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json parse error at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("yaml parse error at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("missing dataset directory {path}")]
    MissingDirectory { path: PathBuf },
    #[error("no metadata record for image stem {stem:?}")]
    MissingMetadata { stem: String },
    #[error("cannot parse tile index from file name {path}")]
    BadIndexSuffix { path: PathBuf },
    #[error("malformed acquisition date {value:?} (expected YYYY-MM-DD)")]
    BadDate { value: String },
    #[error("malformed acquisition time {value:?} (expected HHhMM)")]
    BadTime { value: String },
    #[error("acquisition year {year} outside supported range 2018-2021")]
    UnsupportedYear { year: i32 },
    #[error("config key {key:?} not present")]
    MissingConfigKey { key: String },
    #[error("config key {key:?} has unexpected type: {source}")]
    ConfigKeyType {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Per-tile acquisition record from the metadata lookup table,
/// keyed externally by image stem.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchMetadata {
    pub patch_centroid_x: f64,
    pub patch_centroid_y: f64,
    pub patch_centroid_z: f64,
    pub camera: String,
    /// Acquisition date, `YYYY-MM-DD`.
    pub date: String,
    /// Acquisition time, `HHhMM`.
    pub time: String,
}

/// Advisory data-integrity finding. Never aborts a build; callers decide
/// whether a mismatched manifest is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityWarning {
    CountMismatch { images: usize, masks: usize },
    OrderMismatch {
        image_suffix: String,
        mask_suffix: String,
    },
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityWarning::CountMismatch { images, masks } => write!(
                f,
                "unmatching number of images and masks ({images} images, {masks} masks)"
            ),
            IntegrityWarning::OrderMismatch {
                image_suffix,
                mask_suffix,
            } => write!(
                f,
                "unsorted images and masks (image suffix {image_suffix:?} vs mask suffix {mask_suffix:?})"
            ),
        }
    }
}

/// One split's manifest. `images`, `masks`, and `features` are
/// position-aligned: index i refers to the same sample. `masks` stays empty
/// for the test split and `features` stays empty when metadata is disabled.
#[derive(Debug, Clone, Default)]
pub struct SplitManifest {
    pub images: Vec<PathBuf>,
    pub masks: Vec<PathBuf>,
    pub features: Vec<Vec<f32>>,
    pub warnings: Vec<IntegrityWarning>,
}

impl SplitManifest {
    /// Sample count for this split.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
