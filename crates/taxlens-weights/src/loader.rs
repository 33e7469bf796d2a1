//! Artifact discovery and reading.

use std::path::{Path, PathBuf};

use taxlens_core::errors::WeightError;
use tracing::debug;

use crate::artifact::WeightArtifact;

/// Candidate files in `dir` with the given extension, sorted by file name
/// and capped at `max`.
pub fn discover(dir: &Path, extension: &str, max: usize) -> Result<Vec<PathBuf>, WeightError> {
    let entries = std::fs::read_dir(dir).map_err(|e| WeightError::DirectoryUnreadable {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let matches = path.is_file() && path.extension().is_some_and(|ext| ext == extension);
            matches.then_some(path)
        })
        .collect();
    candidates.sort();
    candidates.truncate(max);

    debug!(dir = %dir.display(), count = candidates.len(), "artifact candidates discovered");
    Ok(candidates)
}

/// File name used as the artifact identifier.
pub fn identifier(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and parse one artifact file.
pub fn read_artifact(path: &Path) -> Result<WeightArtifact, WeightError> {
    let id = identifier(path);
    let content = std::fs::read_to_string(path).map_err(|e| WeightError::ArtifactLoad {
        id: id.clone(),
        reason: e.to_string(),
    })?;
    WeightArtifact::from_json(&id, &content)
}
