use serde::{Deserialize, Serialize};

use super::IssueType;

/// Numeric components behind an explanation's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub model_confidence: f64,
    /// Mean similarity of the retrieved evidence, 0 when none was found.
    pub context_relevance: f64,
    pub severity_weight: f64,
}

/// Human-readable explanation of one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub issue_type: IssueType,
    /// Model confidence in [0, 1], plus whatever noise the confidence source adds.
    pub confidence: f64,
    pub narrative: String,
    pub relevant_evidence: Vec<String>,
    pub recommendation: String,
    pub score_breakdown: ScoreBreakdown,
}
