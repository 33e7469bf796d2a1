use std::sync::Arc;

use proptest::prelude::*;
use taxlens_core::traits::IEmbeddingProvider;
use taxlens_embeddings::similarity::{cosine_similarity, l2_norm, l2_normalize};
use taxlens_embeddings::{CodepointEmbedder, Deterministic, SeededNoise};

proptest! {
    #[test]
    fn prefix_is_reproducible_under_noise(text in ".{0,150}", seed in any::<u64>()) {
        let embedder = CodepointEmbedder::new(768, Arc::new(SeededNoise::with_seed(seed)));
        let a = embedder.embed(&text).unwrap();
        let b = embedder.embed(&text).unwrap();
        prop_assert_eq!(&a[..100], &b[..100]);
    }

    #[test]
    fn prefix_matches_code_points(text in "[a-zA-Z0-9 ]{0,120}") {
        let embedder = CodepointEmbedder::new(768, Arc::new(Deterministic));
        let v = embedder.embed(&text).unwrap();
        for (i, c) in text.chars().take(100).enumerate() {
            prop_assert_eq!(v[i], c as u32 as f32 / 255.0);
        }
    }

    #[test]
    fn vectors_are_l2_normalizable(text in ".{1,150}", seed in any::<u64>()) {
        let embedder = CodepointEmbedder::new(768, Arc::new(SeededNoise::with_seed(seed)));
        let mut v = embedder.embed(&text).unwrap();
        prop_assert_eq!(v.len(), 768);
        prop_assert!(l2_norm(&v).is_finite());
        l2_normalize(&mut v);
        let norm = l2_norm(&v);
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn cosine_is_bounded(a in proptest::collection::vec(-10.0f32..10.0, 1..64),
                         b in proptest::collection::vec(-10.0f32..10.0, 1..64)) {
        let s = cosine_similarity(&a, &b);
        prop_assert!(s.is_finite());
        prop_assert!((-1.0 - 1e-6..=1.0 + 1e-6).contains(&s));
    }
}

#[test]
fn deterministic_embeddings_are_identical() {
    let embedder = CodepointEmbedder::new(768, Arc::new(Deterministic));
    let a = embedder.embed("REVERSE_CHARGE_VIOLATION reverse_charge").unwrap();
    let b = embedder.embed("REVERSE_CHARGE_VIOLATION reverse_charge").unwrap();
    assert_eq!(a, b);
}
