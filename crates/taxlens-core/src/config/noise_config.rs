use serde::{Deserialize, Serialize};

use super::defaults;

/// Noise source configuration.
///
/// With `enabled = false` every random term collapses to its deterministic
/// value: zero jitter, zero perturbation, midpoint fallbacks and a zeroed
/// embedding tail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub enabled: bool,
    /// Fixed seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_NOISE_ENABLED,
            seed: None,
        }
    }
}
