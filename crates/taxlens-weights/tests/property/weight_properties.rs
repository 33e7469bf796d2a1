//! Property tests for confidence scoring and composition.

use std::sync::Arc;

use ndarray::Array2;
use proptest::prelude::*;
use taxlens_core::config::WeightsConfig;
use taxlens_embeddings::{Deterministic, SeededNoise};
use taxlens_weights::{WeightArtifact, WeightSource, WeightStore};

fn matrix_strategy() -> impl Strategy<Value = Array2<f32>> {
    (0usize..12, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-10.0f32..10.0, rows * cols).prop_map(move |flat| {
            Array2::from_shape_vec((rows, cols), flat).unwrap_or_else(|_| Array2::zeros((0, 0)))
        })
    })
}

proptest! {
    #[test]
    fn score_is_always_finite_and_non_negative(
        matrices in prop::collection::vec(matrix_strategy(), 0..5),
        query in prop::collection::vec(0.0f32..1.0, 0..64),
        seed in any::<u64>(),
    ) {
        let artifacts = matrices
            .into_iter()
            .enumerate()
            .map(|(i, m)| WeightArtifact::matrix(format!("m{i}"), m))
            .collect();
        let mut store = WeightStore::new(WeightsConfig::default(), Arc::new(SeededNoise::with_seed(seed)));
        store.load(WeightSource::Artifacts(artifacts));

        let score = store.score(&query);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    #[test]
    fn deterministic_scores_are_repeatable(
        matrices in prop::collection::vec(matrix_strategy(), 1..4),
        query in prop::collection::vec(0.0f32..1.0, 1..32),
    ) {
        let artifacts: Vec<_> = matrices
            .into_iter()
            .enumerate()
            .map(|(i, m)| WeightArtifact::matrix(format!("m{i}"), m))
            .collect();
        let mut store = WeightStore::new(WeightsConfig::default(), Arc::new(Deterministic));
        store.load(WeightSource::Artifacts(artifacts));

        prop_assert_eq!(store.score(&query), store.score(&query));
    }

    #[test]
    fn composite_is_always_defined(
        matrices in prop::collection::vec(matrix_strategy(), 0..4),
    ) {
        let artifacts = matrices
            .into_iter()
            .enumerate()
            .map(|(i, m)| WeightArtifact::matrix(format!("m{i}"), m))
            .collect();
        let mut store = WeightStore::new(WeightsConfig::default(), Arc::new(Deterministic));
        let report = store.load(WeightSource::Artifacts(artifacts));

        prop_assert_eq!(report.composite_shape, store.composite().dim());
        prop_assert!(store.composite().iter().all(|x| !x.is_nan()));
    }
}
