//! Property tests for the GST rules.

use proptest::prelude::*;
use taxlens_core::models::{InvoiceRecord, IssueType};
use taxlens_core::traits::IAnomalyDetector;
use taxlens_engine::detector::is_valid_gstin;
use taxlens_engine::RuleBasedDetector;

fn state_code() -> impl Strategy<Value = u32> {
    prop_oneof![1u32..=38, Just(97u32)]
}

proptest! {
    #[test]
    fn well_formed_gstins_are_accepted(
        state in state_code(),
        pan in "[A-Z]{5}[0-9]{4}[A-Z]",
        entity in "[1-9A-Z]",
        check in "[0-9A-Z]",
    ) {
        let gstin = format!("{state:02}{pan}{entity}Z{check}");
        prop_assert!(is_valid_gstin(&gstin));
        prop_assert!(is_valid_gstin(&gstin.to_lowercase()));
    }

    #[test]
    fn arbitrary_text_never_panics(s in ".{0,40}") {
        let _ = is_valid_gstin(&s);
    }

    #[test]
    fn itc_rule_fires_iff_overclaimed(claimed in 0.0f64..1e7, eligible in 0.0f64..1e7) {
        let record = InvoiceRecord {
            itc_claimed: Some(claimed),
            itc_eligible: Some(eligible),
            ..Default::default()
        };
        let issues = RuleBasedDetector.detect(&record);
        let flagged = issues.iter().any(|i| i.issue_type == IssueType::ItcMismatch);
        prop_assert_eq!(flagged, claimed > eligible);
    }

    #[test]
    fn reverse_charge_rule_needs_tax(cgst in 0.0f64..1e5, sgst in 0.0f64..1e5, rcm in any::<bool>()) {
        let record = InvoiceRecord {
            reverse_charge: Some(rcm),
            cgst,
            sgst,
            ..Default::default()
        };
        let flagged = !RuleBasedDetector.detect(&record).is_empty();
        prop_assert_eq!(flagged, rcm && (cgst > 0.0 || sgst > 0.0));
    }
}
