use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use taxlens_core::config::RetrievalConfig;
use taxlens_core::traits::INoiseSource;
use taxlens_embeddings::{CodepointEmbedder, SeededNoise};
use taxlens_retrieval::{ReferenceCorpus, VectorIndex};

fn build_index() -> VectorIndex {
    let noise: Arc<dyn INoiseSource> = Arc::new(SeededNoise::with_seed(42));
    let mut index = VectorIndex::new(
        RetrievalConfig::default(),
        Arc::new(CodepointEmbedder::new(768, noise.clone())),
        noise,
    );
    index.build(&ReferenceCorpus::builtin(50));
    index
}

fn bench_build_builtin(c: &mut Criterion) {
    c.bench_function("index_build_250_fragments", |b| b.iter(build_index));
}

fn bench_search_top3(c: &mut Criterion) {
    let index = build_index();
    c.bench_function("search_top3_window_50", |b| {
        b.iter(|| index.search("ITC_MISMATCH itc_claimed", 3))
    });
}

criterion_group!(benches, bench_build_builtin, bench_search_top3);
criterion_main!(benches);
