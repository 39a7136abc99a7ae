//! Working-directory input discovery.

use crate::error::{DiscoveryError, DiscoveryResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find exactly one `*.{extension}` file in `dir`.
///
/// Zero candidates or more than one is fatal: a run cleans one file, and
/// guessing between several would silently clean the wrong one. The
/// extension match is case-insensitive; entries are sorted so the error
/// for the multi-candidate case is deterministic.
///
/// # Errors
///
/// - `DiscoveryError::NoCandidates` when nothing matches
/// - `DiscoveryError::TooManyCandidates` when more than one file matches
/// - `DiscoveryError::Io` when the directory cannot be read
pub fn discover_input(dir: &Path, extension: &str) -> DiscoveryResult<PathBuf> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case(extension))
                    .unwrap_or(false)
        })
        .collect();
    candidates.sort();

    debug!(
        dir = %dir.display(),
        extension,
        count = candidates.len(),
        "scanned working directory"
    );

    match candidates.len() {
        0 => Err(DiscoveryError::NoCandidates {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        count => Err(DiscoveryError::TooManyCandidates {
            count,
            extension: extension.to_string(),
        }),
    }
}
