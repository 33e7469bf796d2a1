use serde::{Deserialize, Serialize};

use super::{Explanation, Issue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
}

/// Outcome of processing one record.
///
/// `issues[i]` is explained by `explanations[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub status: ComplianceStatus,
    pub issues: Vec<Issue>,
    pub explanations: Vec<Explanation>,
}

impl ProcessResult {
    pub fn compliant() -> Self {
        Self {
            status: ComplianceStatus::Compliant,
            issues: Vec::new(),
            explanations: Vec::new(),
        }
    }

    pub fn non_compliant(issues: Vec<Issue>, explanations: Vec<Explanation>) -> Self {
        debug_assert_eq!(issues.len(), explanations.len());
        Self {
            status: ComplianceStatus::NonCompliant,
            issues,
            explanations,
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}
