//! Property tests for VectorIndex search.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use proptest::prelude::*;
use taxlens_core::config::RetrievalConfig;
use taxlens_core::traits::INoiseSource;
use taxlens_embeddings::{CodepointEmbedder, Deterministic};
use taxlens_retrieval::{ReferenceCorpus, VectorIndex};

fn shared_index() -> &'static VectorIndex {
    static INDEX: OnceLock<VectorIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let noise: Arc<dyn INoiseSource> = Arc::new(Deterministic);
        let mut index = VectorIndex::new(
            RetrievalConfig::default(),
            Arc::new(CodepointEmbedder::new(768, noise.clone())),
            noise,
        );
        index.build(&ReferenceCorpus::builtin(50));
        index
    })
}

proptest! {
    #[test]
    fn results_bounded_by_k_and_window(query in ".{0,120}", k in 0usize..80) {
        let index = shared_index();
        let hits = index.search(&query, k);
        prop_assert!(hits.len() <= k.min(50));
    }

    #[test]
    fn results_sorted_descending_without_jitter(query in "[A-Za-z_ ]{1,60}", k in 1usize..60) {
        let hits = shared_index().search(&query, k);
        prop_assert!(hits.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }

    #[test]
    fn results_only_reference_indexed_ids(query in ".{1,80}", k in 1usize..20) {
        let index = shared_index();
        let hits = index.search(&query, k);
        let unique: HashSet<_> = hits.iter().map(|h| h.id.as_str()).collect();
        prop_assert_eq!(unique.len(), hits.len());
        for hit in &hits {
            prop_assert!(index.get(&hit.id).is_some());
        }
    }

    #[test]
    fn similarity_is_finite(query in ".{0,200}") {
        for hit in shared_index().search(&query, 5) {
            prop_assert!(hit.similarity.is_finite());
        }
    }
}
