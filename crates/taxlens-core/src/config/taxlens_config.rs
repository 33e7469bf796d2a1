//! Top-level configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    EmbeddingConfig, ExplanationConfig, NoiseConfig, ObservabilityConfig, RetrievalConfig,
    WeightsConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TAXLENS_*`, applied via `apply_env_overrides`)
/// 2. Config file (`taxlens.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaxlensConfig {
    pub weights: WeightsConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub explanation: ExplanationConfig,
    pub noise: NoiseConfig,
    pub observability: ObservabilityConfig,
}

impl TaxlensConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file, then validate it.
    /// Unknown keys are silently ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: TaxlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TAXLENS_*` environment overrides.
    ///
    /// - `TAXLENS_WEIGHTS_DIR`: artifact directory
    /// - `TAXLENS_BOOKS_DIR`: reference document directory
    /// - `TAXLENS_NOISE_SEED`: fixed noise seed (ignored if not a u64)
    /// - `TAXLENS_DETERMINISTIC`: `1`/`true` disables every noise term
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup. Split out so tests don't
    /// have to mutate the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("TAXLENS_WEIGHTS_DIR") {
            self.weights.artifact_dir = Some(dir);
        }
        if let Some(dir) = lookup("TAXLENS_BOOKS_DIR") {
            self.retrieval.books_dir = Some(dir);
        }
        if let Some(seed) = lookup("TAXLENS_NOISE_SEED").and_then(|s| s.parse::<u64>().ok()) {
            self.noise.seed = Some(seed);
        }
        if let Some(flag) = lookup("TAXLENS_DETERMINISTIC") {
            if matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes") {
                self.noise.enabled = false;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding.dimensions < self.embedding.codepoint_prefix {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: format!(
                    "must be at least embedding.codepoint_prefix ({})",
                    self.embedding.codepoint_prefix
                ),
            });
        }
        if !(self.embedding.scale_divisor.is_finite() && self.embedding.scale_divisor > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.scale_divisor".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        if self.weights.max_artifacts == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "weights.max_artifacts".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.weights.synthetic_rows == 0 || self.weights.synthetic_cols == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "weights.synthetic_rows".to_string(),
                message: "synthetic shape must be non-empty".to_string(),
            });
        }
        if self.retrieval.candidate_window == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.candidate_window".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.retrieval.chunk_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.chunk_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, amplitude) in [
            ("retrieval.jitter_amplitude", self.retrieval.jitter_amplitude),
            ("weights.score_jitter", self.weights.score_jitter),
        ] {
            if !(0.0..=1.0).contains(&amplitude) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        for (field, weight) in [
            (
                "explanation.critical_severity_weight",
                self.explanation.critical_severity_weight,
            ),
            (
                "explanation.standard_severity_weight",
                self.explanation.standard_severity_weight,
            ),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if self.explanation.score_precision > 10 {
            return Err(ConfigError::ValidationFailed {
                field: "explanation.score_precision".to_string(),
                message: "must be at most 10".to_string(),
            });
        }
        Ok(())
    }
}
