use serde::{Deserialize, Serialize};

use super::defaults;

/// Explanation composer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationConfig {
    /// Evidence fragments retrieved per issue.
    pub evidence_top_k: usize,
    /// Severity weight for CRITICAL issues.
    pub critical_severity_weight: f64,
    /// Severity weight for every other severity.
    pub standard_severity_weight: f64,
    /// Decimal places kept on every numeric score.
    pub score_precision: u32,
}

impl Default for ExplanationConfig {
    fn default() -> Self {
        Self {
            evidence_top_k: defaults::DEFAULT_EVIDENCE_TOP_K,
            critical_severity_weight: defaults::DEFAULT_CRITICAL_SEVERITY_WEIGHT,
            standard_severity_weight: defaults::DEFAULT_STANDARD_SEVERITY_WEIGHT,
            score_precision: defaults::DEFAULT_SCORE_PRECISION,
        }
    }
}
