use std::path::PathBuf;

use crate::gather::{check_alignment, collect_tiles};
use crate::metadata::{image_stem, MetadataLookup};
use crate::split::split_domains;
use crate::types::{ManifestResult, SplitManifest};

/// Inputs for one manifest build.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    /// Dataset root containing `train/` and `test/` domain folders.
    pub data_root: PathBuf,
    /// JSON metadata lookup keyed by image stem.
    pub metadata_path: PathBuf,
    /// Share of `train/` domains assigned to the train split.
    pub val_percent: f64,
    /// Attach encoded metadata features to every split.
    pub use_metadata: bool,
    /// Optional shuffle seed for a reproducible domain partition.
    pub seed: Option<u64>,
}

/// Built manifests for all three splits.
#[derive(Debug, Clone, Default)]
pub struct DatasetManifests {
    pub train: SplitManifest,
    pub val: SplitManifest,
    pub test: SplitManifest,
}

impl ManifestBuilder {
    /// Build train, validation, and test manifests.
    ///
    /// The metadata lookup is loaded once and shared across splits; test
    /// manifests never gather masks (unavailable at inference time).
    pub fn build(&self) -> ManifestResult<DatasetManifests> {
        let split = split_domains(&self.data_root, self.val_percent, self.seed)?;
        let lookup = if self.use_metadata {
            Some(MetadataLookup::load(&self.metadata_path)?)
        } else {
            None
        };
        Ok(DatasetManifests {
            train: gather_split(&split.train, lookup.as_ref(), false)?,
            val: gather_split(&split.val, lookup.as_ref(), false)?,
            test: gather_split(&split.test, lookup.as_ref(), true)?,
        })
    }
}

fn gather_split(
    domains: &[PathBuf],
    lookup: Option<&MetadataLookup>,
    test_set: bool,
) -> ManifestResult<SplitManifest> {
    let mut manifest = SplitManifest::default();
    for domain in domains {
        manifest.images.extend(collect_tiles(domain, "IMG")?);
        if !test_set {
            manifest.masks.extend(collect_tiles(domain, "MSK")?);
        }
    }
    if !test_set {
        manifest.warnings = check_alignment(&manifest.images, &manifest.masks);
    }
    if let Some(lookup) = lookup {
        for image in &manifest.images {
            manifest.features.push(lookup.encode_for(&image_stem(image))?);
        }
    }
    Ok(manifest)
}
