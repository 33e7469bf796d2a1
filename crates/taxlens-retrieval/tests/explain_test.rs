//! ExplanationComposer wired to a real index and weight store.

use std::sync::Arc;

use taxlens_core::config::{ExplanationConfig, RetrievalConfig, WeightsConfig};
use taxlens_core::models::{Issue, IssueType, Severity};
use taxlens_core::traits::INoiseSource;
use taxlens_embeddings::{CodepointEmbedder, Deterministic};
use taxlens_retrieval::{ExplanationComposer, ReferenceCorpus, VectorIndex};
use taxlens_weights::{WeightSource, WeightStore};

struct Fixture {
    embedder: CodepointEmbedder,
    index: VectorIndex,
    weights: WeightStore,
    config: ExplanationConfig,
}

fn fixture() -> Fixture {
    let noise: Arc<dyn INoiseSource> = Arc::new(Deterministic);
    let mut index = VectorIndex::new(
        RetrievalConfig::default(),
        Arc::new(CodepointEmbedder::new(768, noise.clone())),
        noise.clone(),
    );
    index.build(&ReferenceCorpus::builtin(50));
    let mut weights = WeightStore::new(WeightsConfig::default(), noise.clone());
    weights.load(WeightSource::Directory(test_fixtures::fixture_path("weights/valid")));
    Fixture {
        embedder: CodepointEmbedder::new(768, noise),
        index,
        weights,
        config: ExplanationConfig::default(),
    }
}

#[test]
fn explanation_is_reproducible_without_noise() {
    let f = fixture();
    let composer = ExplanationComposer::new(&f.index, &f.weights, &f.embedder, &f.config);
    let issue = Issue::new(
        IssueType::ReverseChargeViolation,
        Severity::Critical,
        "reverse_charge",
        "Tax charged on RCM invoice",
        "No tax should be charged",
    );

    let first = composer.explain(&issue);
    let second = composer.explain(&issue);
    assert_eq!(first, second);
    assert_eq!(first.relevant_evidence.len(), 3);
    assert_eq!(first.score_breakdown.severity_weight, 0.85);
    assert!(first.narrative.contains("Reverse Charge Mechanism"));
    assert!(first.recommendation.contains("Table 4B"));
}

#[test]
fn confidence_comes_from_the_weight_store() {
    let f = fixture();
    let composer = ExplanationComposer::new(&f.index, &f.weights, &f.embedder, &f.config);
    let issue = Issue::new(IssueType::ItcMismatch, Severity::High, "itc_claimed", 15000.0, 12000.0);
    let e = composer.explain(&issue);
    assert_eq!(e.confidence, e.score_breakdown.model_confidence);
    assert!((0.0..=1.0).contains(&e.confidence));
    assert!(e.narrative.contains("(15000)"));
}

#[test]
fn empty_index_gives_zero_relevance() {
    let f = fixture();
    let noise: Arc<dyn INoiseSource> = Arc::new(Deterministic);
    let empty = VectorIndex::new(
        RetrievalConfig::default(),
        Arc::new(CodepointEmbedder::new(768, noise.clone())),
        noise,
    );
    let composer = ExplanationComposer::new(&empty, &f.weights, &f.embedder, &f.config);
    let issue = Issue::new(IssueType::from("E_WAY_BILL_MISSING"), Severity::Low, "eway_bill", "", "required");
    let e = composer.explain(&issue);
    assert!(e.relevant_evidence.is_empty());
    assert_eq!(e.score_breakdown.context_relevance, 0.0);
    assert_eq!(e.narrative, "Compliance violation detected in field: eway_bill");
}
