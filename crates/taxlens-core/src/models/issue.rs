use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ISSUE_GSTIN_INVALID, ISSUE_ITC_MISMATCH, ISSUE_REVERSE_CHARGE_VIOLATION};

/// Kind of rule violation found on a record.
///
/// Serialized as its SCREAMING_SNAKE_CASE key. Keys without a dedicated
/// variant survive as `Other` and get the generic narrative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueType {
    ItcMismatch,
    ReverseChargeViolation,
    GstinInvalid,
    Other(String),
}

impl IssueType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ItcMismatch => ISSUE_ITC_MISMATCH,
            Self::ReverseChargeViolation => ISSUE_REVERSE_CHARGE_VIOLATION,
            Self::GstinInvalid => ISSUE_GSTIN_INVALID,
            Self::Other(key) => key,
        }
    }
}

impl From<String> for IssueType {
    fn from(key: String) -> Self {
        match key.as_str() {
            ISSUE_ITC_MISMATCH => Self::ItcMismatch,
            ISSUE_REVERSE_CHARGE_VIOLATION => Self::ReverseChargeViolation,
            ISSUE_GSTIN_INVALID => Self::GstinInvalid,
            _ => Self::Other(key),
        }
    }
}

impl From<&str> for IssueType {
    fn from(key: &str) -> Self {
        Self::from(key.to_string())
    }
}

impl From<IssueType> for String {
    fn from(t: IssueType) -> Self {
        match t {
            IssueType::Other(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue severity. Only CRITICAL changes the severity weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    High,
    Critical,
}

/// A detected or expected field value: a monetary amount or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueValue {
    Amount(f64),
    Text(String),
}

impl fmt::Display for IssueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral amounts render without a trailing ".0".
            Self::Amount(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.0}"),
            Self::Amount(v) => write!(f, "{v:.2}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for IssueValue {
    fn from(v: f64) -> Self {
        Self::Amount(v)
    }
}

impl From<&str> for IssueValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A rule violation produced by an anomaly detector for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub field: String,
    pub detected_value: IssueValue,
    pub expected_value: IssueValue,
}

impl Issue {
    pub fn new(
        issue_type: IssueType,
        severity: Severity,
        field: impl Into<String>,
        detected_value: impl Into<IssueValue>,
        expected_value: impl Into<IssueValue>,
    ) -> Self {
        Self {
            issue_type,
            severity,
            field: field.into(),
            detected_value: detected_value.into(),
            expected_value: expected_value.into(),
        }
    }

    /// Retrieval query for this issue: `"{type} {field}"`.
    pub fn query(&self) -> String {
        format!("{} {}", self.issue_type, self.field)
    }
}
