//! Rule-based anomaly detection over invoice fields.
//!
//! Rules run in a fixed order and each one is skipped when the fields it
//! needs are absent:
//! 1. ITC claimed above eligible → `ITC_MISMATCH` (HIGH)
//! 2. Tax charged on a reverse-charge invoice → `REVERSE_CHARGE_VIOLATION` (CRITICAL)
//! 3. Malformed supplier GSTIN → `GSTIN_INVALID` (HIGH)

use std::sync::LazyLock;

use regex::Regex;
use taxlens_core::models::{InvoiceRecord, Issue, IssueType, Severity};
use taxlens_core::traits::IAnomalyDetector;
use tracing::debug;

/// 2-digit state code, 10-char PAN, entity number, `Z`, checksum.
static RE_GSTIN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z{1}[0-9A-Z]{1}$").ok()
});

const GSTIN_LEN: usize = 15;
const MAX_STATE_CODE: u32 = 38;
const OTHER_TERRITORY_CODE: u32 = 97;

pub const GSTIN_EXPECTED: &str = "15 character GSTIN (e.g. 22AAAAA0000A1Z5)";
pub const RCM_DETECTED: &str = "Tax charged on RCM invoice";
pub const RCM_EXPECTED: &str = "No tax should be charged";

/// Whether `gstin` is well-formed after trimming and upper-casing.
pub fn is_valid_gstin(gstin: &str) -> bool {
    let normalized = gstin.trim().to_uppercase();
    if normalized.len() != GSTIN_LEN {
        return false;
    }
    let Some(re) = RE_GSTIN.as_ref() else {
        return false;
    };
    if !re.is_match(&normalized) {
        return false;
    }
    normalized[..2]
        .parse::<u32>()
        .is_ok_and(|code| (1..=MAX_STATE_CODE).contains(&code) || code == OTHER_TERRITORY_CODE)
}

/// The builtin GST rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedDetector;

impl RuleBasedDetector {
    pub fn new() -> Self {
        Self
    }

    fn check_itc(record: &InvoiceRecord) -> Option<Issue> {
        let (claimed, eligible) = (record.itc_claimed?, record.itc_eligible?);
        (claimed > eligible).then(|| {
            Issue::new(IssueType::ItcMismatch, Severity::High, "itc_claimed", claimed, eligible)
        })
    }

    fn check_reverse_charge(record: &InvoiceRecord) -> Option<Issue> {
        let taxed = record.cgst > 0.0 || record.sgst > 0.0;
        (record.reverse_charge == Some(true) && taxed).then(|| {
            Issue::new(
                IssueType::ReverseChargeViolation,
                Severity::Critical,
                "reverse_charge",
                RCM_DETECTED,
                RCM_EXPECTED,
            )
        })
    }

    fn check_gstin(record: &InvoiceRecord) -> Option<Issue> {
        let gstin = record.supplier_gstin.as_deref()?;
        (!is_valid_gstin(gstin)).then(|| {
            Issue::new(
                IssueType::GstinInvalid,
                Severity::High,
                "supplier_gstin",
                gstin.trim(),
                GSTIN_EXPECTED,
            )
        })
    }
}

impl IAnomalyDetector for RuleBasedDetector {
    fn detect(&self, record: &InvoiceRecord) -> Vec<Issue> {
        let issues: Vec<Issue> = [
            Self::check_itc(record),
            Self::check_reverse_charge(record),
            Self::check_gstin(record),
        ]
        .into_iter()
        .flatten()
        .collect();
        debug!(invoice = record.label(), issues = issues.len(), "rules evaluated");
        issues
    }

    fn name(&self) -> &str {
        "gst-rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxlens_core::models::IssueValue;

    fn record() -> InvoiceRecord {
        InvoiceRecord::default()
    }

    #[test]
    fn itc_overclaim_is_flagged() {
        let r = InvoiceRecord {
            itc_claimed: Some(15000.0),
            itc_eligible: Some(12000.0),
            reverse_charge: Some(false),
            ..record()
        };
        let issues = RuleBasedDetector.detect(&r);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::ItcMismatch);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].detected_value, IssueValue::Amount(15000.0));
        assert_eq!(issues[0].expected_value, IssueValue::Amount(12000.0));
    }

    #[test]
    fn itc_needs_both_fields() {
        let r = InvoiceRecord {
            itc_claimed: Some(15000.0),
            ..record()
        };
        assert!(RuleBasedDetector.detect(&r).is_empty());
    }

    #[test]
    fn equal_itc_is_fine() {
        let r = InvoiceRecord {
            itc_claimed: Some(5000.0),
            itc_eligible: Some(5000.0),
            ..record()
        };
        assert!(RuleBasedDetector.detect(&r).is_empty());
    }

    #[test]
    fn tax_on_reverse_charge_is_critical() {
        let r = InvoiceRecord {
            reverse_charge: Some(true),
            sgst: 300.0,
            ..record()
        };
        let issues = RuleBasedDetector.detect(&r);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].field, "reverse_charge");
    }

    #[test]
    fn untaxed_reverse_charge_is_fine() {
        let r = InvoiceRecord {
            reverse_charge: Some(true),
            ..record()
        };
        assert!(RuleBasedDetector.detect(&r).is_empty());
    }

    #[test]
    fn rules_report_in_fixed_order() {
        let r = InvoiceRecord {
            itc_claimed: Some(2.0),
            itc_eligible: Some(1.0),
            reverse_charge: Some(true),
            cgst: 1.0,
            supplier_gstin: Some("bogus".into()),
            ..record()
        };
        let kinds: Vec<_> = RuleBasedDetector
            .detect(&r)
            .into_iter()
            .map(|i| i.issue_type)
            .collect();
        assert_eq!(
            kinds,
            [IssueType::ItcMismatch, IssueType::ReverseChargeViolation, IssueType::GstinInvalid]
        );
    }

    #[test]
    fn gstin_validation() {
        assert!(is_valid_gstin("22AAAAA0000A1Z5"));
        assert!(is_valid_gstin("  27aapfu0939f1zv "));
        assert!(is_valid_gstin("97AAAAA0000A1Z5"));
        assert!(!is_valid_gstin("99AAAAA0000A1Z5"));
        assert!(!is_valid_gstin("00AAAAA0000A1Z5"));
        assert!(!is_valid_gstin("22AAAAA0000A0Z5"));
        assert!(!is_valid_gstin("22AAAAA0000A1X5"));
        assert!(!is_valid_gstin("22AAAAA0000A1Z"));
        assert!(!is_valid_gstin(""));
    }

    #[test]
    fn valid_gstin_raises_nothing() {
        let r = InvoiceRecord {
            supplier_gstin: Some("29ABCDE1234F1Z5".into()),
            ..record()
        };
        assert!(RuleBasedDetector.detect(&r).is_empty());
    }
}
