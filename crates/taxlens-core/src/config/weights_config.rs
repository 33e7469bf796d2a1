use serde::{Deserialize, Serialize};

use super::defaults;

/// Weight store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    /// Directory scanned for weight artifacts. `None` loads nothing.
    pub artifact_dir: Option<String>,
    /// Only the first N candidates (sorted by file name) are considered.
    pub max_artifacts: usize,
    /// File extension of artifact candidates.
    pub extension: String,
    /// Shape of the synthetic matrix substituted for an unreadable artifact.
    pub synthetic_rows: usize,
    pub synthetic_cols: usize,
    /// Standard deviation of the perturbation added to loaded matrices.
    pub perturbation_scale: f64,
    /// Half-width of the jitter added to each per-layer similarity.
    pub score_jitter: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            artifact_dir: None,
            max_artifacts: defaults::DEFAULT_MAX_ARTIFACTS,
            extension: defaults::DEFAULT_ARTIFACT_EXTENSION.to_string(),
            synthetic_rows: defaults::DEFAULT_SYNTHETIC_ROWS,
            synthetic_cols: defaults::DEFAULT_SYNTHETIC_COLS,
            perturbation_scale: defaults::DEFAULT_PERTURBATION_SCALE,
            score_jitter: defaults::DEFAULT_SCORE_JITTER,
        }
    }
}
