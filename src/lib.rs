//! Dataset manifest construction for aerial tile segmentation runs.
//!
//! Discovers per-scene domain folders under a dataset root, partitions them
//! into train/validation/test splits, gathers index-ordered `IMG*.tif` /
//! `MSK*.tif` tile references, optionally encodes per-tile acquisition
//! metadata into fixed-length feature vectors, and prints an operator recap.

pub mod config;
pub mod encode;
pub mod gather;
pub mod manifest;
pub mod metadata;
pub mod report;
pub mod split;
pub mod types;

pub use config::RunConfig;
pub use encode::FEATURE_LEN;
pub use manifest::{DatasetManifests, ManifestBuilder};
pub use metadata::MetadataLookup;
pub use report::print_run_summary;
pub use split::{split_domains, DomainSplit};
pub use types::{IntegrityWarning, ManifestError, ManifestResult, PatchMetadata, SplitManifest};
