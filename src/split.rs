//! Domain discovery and train/validation partitioning.

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{ManifestError, ManifestResult};

/// Domain folders assigned to each split.
#[derive(Debug, Clone)]
pub struct DomainSplit {
    pub train: Vec<PathBuf>,
    pub val: Vec<PathBuf>,
    pub test: Vec<PathBuf>,
}

fn list_domains(root: &Path) -> ManifestResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ManifestError::MissingDirectory {
            path: root.to_path_buf(),
        });
    }
    let mut domains = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| ManifestError::Io {
        path: root.to_path_buf(),
        source: e,
    })? {
        let entry = entry.map_err(|e| ManifestError::Io {
            path: root.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            domains.push(path);
        }
    }
    // Stable baseline before any shuffle.
    domains.sort();
    Ok(domains)
}

/// Partition the domain folders under `<data_root>/train` into train and
/// validation sets, and list `<data_root>/test` unsplit.
///
/// The first `floor(n * val_percent)` shuffled domains go to train, the
/// remainder to validation (the parameter keeps its historical name; it is
/// the train share). Passing a seed makes the shuffle reproducible;
/// otherwise the generator is OS-seeded.
pub fn split_domains(
    data_root: &Path,
    val_percent: f64,
    seed: Option<u64>,
) -> ManifestResult<DomainSplit> {
    let mut trainval = list_domains(&data_root.join("train"))?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    trainval.shuffle(&mut rng);

    let idx_split = ((trainval.len() as f64 * val_percent.clamp(0.0, 1.0)).floor() as usize)
        .min(trainval.len());
    let val = trainval.split_off(idx_split);
    let train = trainval;

    let test = list_domains(&data_root.join("test"))?;
    Ok(DomainSplit { train, val, test })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tree(domains: &[&str], test_domains: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in domains {
            fs::create_dir_all(dir.path().join("train").join(name)).unwrap();
        }
        fs::create_dir_all(dir.path().join("test")).unwrap();
        for name in test_domains {
            fs::create_dir_all(dir.path().join("test").join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn partition_sizes() {
        let dir = make_tree(&["D01", "D02", "D03", "D04", "D05"], &["D91"]);
        let split = split_domains(dir.path(), 0.8, Some(1)).unwrap();
        assert_eq!(split.train.len(), 4); // floor(5 * 0.8)
        assert_eq!(split.val.len(), 1);
        assert_eq!(split.train.len() + split.val.len(), 5);
        assert_eq!(split.test.len(), 1);
    }

    #[test]
    fn same_seed_same_partition() {
        let dir = make_tree(&["D01", "D02", "D03", "D04"], &[]);
        let a = split_domains(dir.path(), 0.5, Some(42)).unwrap();
        let b = split_domains(dir.path(), 0.5, Some(42)).unwrap();
        assert_eq!(a.train, b.train);
        assert_eq!(a.val, b.val);
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let dir = make_tree(&["D01", "D02", "D03", "D04", "D05"], &[]);
        let split = split_domains(dir.path(), 0.6, Some(7)).unwrap();
        let mut all: Vec<_> = split.train.iter().chain(&split.val).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn missing_train_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = split_domains(dir.path(), 0.8, Some(1)).unwrap_err();
        assert!(matches!(err, ManifestError::MissingDirectory { .. }));
    }
}
