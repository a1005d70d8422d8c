//! Tile discovery and ordering within a domain folder.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::types::{IntegrityWarning, ManifestError, ManifestResult};

const TILE_EXT: &str = ".tif";
// Filename suffix width compared by the ordering check.
const ORDER_SUFFIX_LEN: usize = 6;

/// Integer tile index embedded between the last `_` and the extension.
fn tile_index(path: &Path) -> ManifestResult<u64> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.rsplit('_').next())
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ManifestError::BadIndexSuffix {
            path: path.to_path_buf(),
        })
}

fn order_suffix(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let skip = stem.chars().count().saturating_sub(ORDER_SUFFIX_LEN);
    stem.chars().skip(skip).collect()
}

/// Recursively collect `<prefix>*.tif` tiles under a domain folder, sorted
/// ascending by embedded tile index. An unparseable index is fatal.
pub fn collect_tiles(domain: &Path, prefix: &str) -> ManifestResult<Vec<PathBuf>> {
    let mut tiles = Vec::new();
    for entry in WalkDir::new(domain) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| domain.to_path_buf());
            ManifestError::Io {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => continue,
        };
        if name.starts_with(prefix) && name.ends_with(TILE_EXT) {
            tiles.push(entry.into_path());
        }
    }

    let mut keyed = tiles
        .into_iter()
        .map(|path| tile_index(&path).map(|index| (index, path)))
        .collect::<ManifestResult<Vec<_>>>()?;
    keyed.sort_by_key(|(index, _)| *index);
    Ok(keyed.into_iter().map(|(_, path)| path).collect())
}

/// Advisory alignment checks between gathered image and mask lists: count
/// equality, plus first/last filename-suffix agreement. Findings are
/// returned, never raised.
pub fn check_alignment(images: &[PathBuf], masks: &[PathBuf]) -> Vec<IntegrityWarning> {
    let mut warnings = Vec::new();
    if images.len() != masks.len() {
        warnings.push(IntegrityWarning::CountMismatch {
            images: images.len(),
            masks: masks.len(),
        });
    }
    for (image, mask) in [
        (images.first(), masks.first()),
        (images.last(), masks.last()),
    ] {
        if let (Some(image), Some(mask)) = (image, mask) {
            let image_suffix = order_suffix(image);
            let mask_suffix = order_suffix(mask);
            if image_suffix != mask_suffix {
                warnings.push(IntegrityWarning::OrderMismatch {
                    image_suffix,
                    mask_suffix,
                });
            }
        }
    }
    warnings.dedup();
    warnings
}
