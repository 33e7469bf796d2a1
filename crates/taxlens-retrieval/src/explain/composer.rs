//! Builds an [`Explanation`] from an issue, retrieved evidence and the
//! confidence model.

use taxlens_core::config::ExplanationConfig;
use taxlens_core::models::{Explanation, Issue, ScoreBreakdown, Severity};
use taxlens_core::traits::{IConfidenceScorer, IEmbeddingProvider, IEvidenceSearch};
use tracing::{debug, warn};

use super::templates;

/// Composes explanations. Holds borrowed collaborators only; building one
/// per record is free.
pub struct ExplanationComposer<'a> {
    evidence: &'a dyn IEvidenceSearch,
    scorer: &'a dyn IConfidenceScorer,
    embedder: &'a dyn IEmbeddingProvider,
    config: &'a ExplanationConfig,
}

impl<'a> ExplanationComposer<'a> {
    pub fn new(
        evidence: &'a dyn IEvidenceSearch,
        scorer: &'a dyn IConfidenceScorer,
        embedder: &'a dyn IEmbeddingProvider,
        config: &'a ExplanationConfig,
    ) -> Self {
        Self {
            evidence,
            scorer,
            embedder,
            config,
        }
    }

    /// Explain one issue. Never mutates it and never fails.
    pub fn explain(&self, issue: &Issue) -> Explanation {
        let query = issue.query();
        let hits = self.evidence.search(&query, self.config.evidence_top_k);

        let query_vec = self.embedder.embed(&query).unwrap_or_else(|e| {
            warn!(query = %query, error = %e, "query embedding failed, scoring an empty vector");
            Vec::new()
        });
        let model_confidence = self.round(self.scorer.score(&query_vec));

        let context_relevance = if hits.is_empty() {
            0.0
        } else {
            self.round(hits.iter().map(|h| h.similarity).sum::<f64>() / hits.len() as f64)
        };

        let severity_weight = self.round(match issue.severity {
            Severity::Critical => self.config.critical_severity_weight,
            _ => self.config.standard_severity_weight,
        });

        debug!(
            issue_type = %issue.issue_type,
            evidence = hits.len(),
            confidence = model_confidence,
            "explanation composed"
        );

        Explanation {
            issue_type: issue.issue_type.clone(),
            confidence: model_confidence,
            narrative: templates::narrative(issue),
            relevant_evidence: hits.into_iter().map(|h| h.content).collect(),
            recommendation: templates::recommendation(&issue.issue_type).to_string(),
            score_breakdown: ScoreBreakdown {
                model_confidence,
                context_relevance,
                severity_weight,
            },
        }
    }

    fn round(&self, value: f64) -> f64 {
        round_to(value, self.config.score_precision)
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxlens_core::errors::TaxlensResult;
    use taxlens_core::models::{IssueType, SearchHit};

    struct FixedEvidence(Vec<f64>);

    impl IEvidenceSearch for FixedEvidence {
        fn search(&self, _query: &str, top_k: usize) -> Vec<SearchHit> {
            self.0
                .iter()
                .take(top_k)
                .enumerate()
                .map(|(i, &similarity)| SearchHit {
                    id: format!("doc::chunk_{i}"),
                    content: format!("Section {i}"),
                    similarity,
                    source_label: "doc".into(),
                })
                .collect()
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    struct FixedScore(f64);

    impl IConfidenceScorer for FixedScore {
        fn score(&self, _query: &[f32]) -> f64 {
            self.0
        }
    }

    struct Ones;

    impl IEmbeddingProvider for Ones {
        fn embed(&self, _text: &str) -> TaxlensResult<Vec<f32>> {
            Ok(vec![1.0; 4])
        }
        fn dimensions(&self) -> usize {
            4
        }
        fn name(&self) -> &str {
            "ones"
        }
    }

    fn issue(severity: Severity) -> Issue {
        Issue::new(IssueType::ItcMismatch, severity, "itc_claimed", 15000.0, 12000.0)
    }

    #[test]
    fn scores_are_rounded_to_precision() {
        let config = ExplanationConfig::default();
        let evidence = FixedEvidence(vec![0.123456, 0.654321, 0.5, 0.9]);
        let scorer = FixedScore(0.876543);
        let composer = ExplanationComposer::new(&evidence, &scorer, &Ones, &config);

        let e = composer.explain(&issue(Severity::High));
        assert_eq!(e.confidence, 0.8765);
        assert_eq!(e.score_breakdown.model_confidence, 0.8765);
        // Mean of the top three.
        assert_eq!(e.score_breakdown.context_relevance, 0.4259);
        assert_eq!(e.score_breakdown.severity_weight, 0.65);
        assert_eq!(e.relevant_evidence, vec!["Section 0", "Section 1", "Section 2"]);
    }

    #[test]
    fn critical_issues_weigh_more() {
        let config = ExplanationConfig::default();
        let evidence = FixedEvidence(vec![]);
        let scorer = FixedScore(0.5);
        let composer = ExplanationComposer::new(&evidence, &scorer, &Ones, &config);

        let e = composer.explain(&issue(Severity::Critical));
        assert_eq!(e.score_breakdown.severity_weight, 0.85);
        assert_eq!(e.score_breakdown.context_relevance, 0.0);
        assert!(e.relevant_evidence.is_empty());
    }

    #[test]
    fn explain_does_not_touch_the_issue() {
        let config = ExplanationConfig::default();
        let evidence = FixedEvidence(vec![0.3]);
        let scorer = FixedScore(0.7);
        let composer = ExplanationComposer::new(&evidence, &scorer, &Ones, &config);

        let before = issue(Severity::High);
        let after = before.clone();
        let e = composer.explain(&after);
        assert_eq!(before, after);
        assert_eq!(e.issue_type, IssueType::ItcMismatch);
    }

    #[test]
    fn rounding_half_away_from_zero() {
        assert_eq!(round_to(0.12346, 4), 0.1235);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(0.5, 0), 1.0);
    }
}
