//! Narrative and recommendation tables, keyed by issue type.

use taxlens_core::models::{Issue, IssueType};

/// Narrative text for an issue. Unknown types get a generic sentence naming
/// the field.
pub fn narrative(issue: &Issue) -> String {
    match &issue.issue_type {
        IssueType::ItcMismatch => format!(
            "Input Tax Credit claimed ({}) exceeds eligible amount ({}). \
             This violates GST provisions under Section 16 of CGST Act.",
            issue.detected_value, issue.expected_value
        ),
        IssueType::ReverseChargeViolation => {
            "Tax has been charged on a Reverse Charge Mechanism (RCM) invoice. \
             As per Section 9(3) and 9(4) of CGST Act, the recipient is liable to pay tax under RCM."
                .to_string()
        }
        IssueType::GstinInvalid => format!(
            "GSTIN format validation failed for '{}'. The GSTIN should be 15 characters \
             following the pattern: 2 digits (state code) + 10 digits/letters (PAN) + \
             1 letter + 1 digit + 1 letter.",
            issue.detected_value
        ),
        IssueType::Other(_) => format!("Compliance violation detected in field: {}", issue.field),
    }
}

/// Remediation advice for an issue type.
pub fn recommendation(issue_type: &IssueType) -> &'static str {
    match issue_type {
        IssueType::ItcMismatch => {
            "Verify supplier GSTIN registration and invoice authenticity. \
             Cross-check with GSTR-2B data. Consider filing rectification return."
        }
        IssueType::ReverseChargeViolation => {
            "Issue credit note immediately. File revised GSTR-1. \
             Ensure RCM transactions are reported in Table 4B of GSTR-1."
        }
        IssueType::GstinInvalid => {
            "Validate GSTIN on GST portal. \
             Request corrected invoice from supplier if GSTIN is incorrect."
        }
        IssueType::Other(_) => "Consult with GST practitioner for remediation.",
    }
}
