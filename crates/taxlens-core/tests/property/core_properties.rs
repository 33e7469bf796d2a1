//! Property tests for issue keys and config validation.

use proptest::prelude::*;
use taxlens_core::models::{IssueType, IssueValue};
use taxlens_core::TaxlensConfig;

proptest! {
    #[test]
    fn any_issue_key_survives_conversion(key in "[A-Z_]{1,40}") {
        let t = IssueType::from(key.as_str());
        prop_assert_eq!(String::from(t.clone()), key.clone());
        prop_assert_eq!(t.as_str(), key.as_str());
    }

    #[test]
    fn whole_amounts_render_without_fraction(v in 0u32..10_000_000) {
        let rendered = IssueValue::Amount(f64::from(v)).to_string();
        prop_assert_eq!(rendered, v.to_string());
    }

    #[test]
    fn jitter_amplitude_validation(amplitude in -2.0f64..2.0) {
        let mut config = TaxlensConfig::default();
        config.retrieval.jitter_amplitude = amplitude;
        prop_assert_eq!(config.validate().is_ok(), (0.0..=1.0).contains(&amplitude));
    }

    #[test]
    fn dimensions_must_cover_prefix(dims in 0usize..1024) {
        let mut config = TaxlensConfig::default();
        config.embedding.dimensions = dims;
        prop_assert_eq!(config.validate().is_ok(), dims >= config.embedding.codepoint_prefix);
    }
}
