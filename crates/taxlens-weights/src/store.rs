//! Loads weight artifacts and scores query embeddings against them.

use std::path::PathBuf;
use std::sync::Arc;

use ndarray::{s, Array2};
use taxlens_core::config::WeightsConfig;
use taxlens_core::errors::WeightError;
use taxlens_core::models::DegradationEvent;
use taxlens_core::traits::{IConfidenceScorer, INoiseSource};
use taxlens_embeddings::similarity::cosine_similarity;
use tracing::{debug, info, warn};

use crate::artifact::{LayerOrigin, WeightArtifact, WeightData, WeightLayer};
use crate::{compose, loader, synthetic};
use taxlens_core::constants::{EMPTY_STORE_CONFIDENCE, UNSCORED_CONFIDENCE};

/// What to load.
#[derive(Debug, Clone)]
pub enum WeightSource {
    /// Scan a directory for artifact files.
    Directory(PathBuf),
    /// Explicit artifact files, in order.
    Files(Vec<PathBuf>),
    /// Artifacts already in memory.
    Artifacts(Vec<WeightArtifact>),
    /// Load nothing; scoring uses the fallback range.
    Empty,
}

/// Outcome of a `load` call.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub candidates: usize,
    pub loaded: usize,
    pub synthesized: usize,
    pub mappings: usize,
    pub composite_shape: (usize, usize),
    pub events: Vec<DegradationEvent>,
}

/// Holds the loaded weight layers and the composite derived from them.
///
/// Immutable once loaded; share it behind an `Arc` for concurrent scoring.
pub struct WeightStore {
    config: WeightsConfig,
    noise: Arc<dyn INoiseSource>,
    layers: Vec<WeightLayer>,
    composite: Array2<f32>,
}

impl WeightStore {
    pub fn new(config: WeightsConfig, noise: Arc<dyn INoiseSource>) -> Self {
        Self {
            config,
            noise,
            layers: Vec::new(),
            composite: compose::identity_placeholder(),
        }
    }

    /// Load up to `max_artifacts` candidates from `source`.
    ///
    /// Never fails: an unreadable candidate becomes a synthetic layer and a
    /// degradation event. Replaces anything loaded before.
    pub fn load(&mut self, source: WeightSource) -> LoadReport {
        let mut report = LoadReport::default();
        let max = self.config.max_artifacts;

        let candidates: Vec<(String, Result<WeightArtifact, WeightError>)> = match source {
            WeightSource::Directory(dir) => {
                match loader::discover(&dir, &self.config.extension, max) {
                    Ok(paths) => paths
                        .iter()
                        .map(|p| (loader::identifier(p), loader::read_artifact(p)))
                        .collect(),
                    Err(e) => {
                        warn!(error = %e, "artifact directory unreadable, loading nothing");
                        report.events.push(DegradationEvent::now(
                            "weights",
                            e.to_string(),
                            "fallback confidence",
                        ));
                        Vec::new()
                    }
                }
            }
            WeightSource::Files(paths) => paths
                .iter()
                .take(max)
                .map(|p| (loader::identifier(p), loader::read_artifact(p)))
                .collect(),
            WeightSource::Artifacts(artifacts) => artifacts
                .into_iter()
                .take(max)
                .map(|a| (a.name.clone(), Ok(a)))
                .collect(),
            WeightSource::Empty => Vec::new(),
        };

        info!(candidates = candidates.len(), "loading weight artifacts");
        report.candidates = candidates.len();

        self.layers = candidates
            .into_iter()
            .enumerate()
            .map(|(idx, (id, parsed))| {
                let layer = match parsed {
                    Ok(artifact) => self.transform(idx, id, artifact),
                    Err(e) => {
                        warn!(artifact = %id, error = %e, "generating synthetic weights");
                        report.events.push(DegradationEvent::now(
                            "weights",
                            e.to_string(),
                            format!("synthetic layer_{idx}"),
                        ));
                        self.synthesize(idx, id)
                    }
                };
                match (&layer.origin, &layer.data) {
                    (LayerOrigin::Synthetic, _) => report.synthesized += 1,
                    (LayerOrigin::Loaded, WeightData::Mapping(_)) => {
                        report.loaded += 1;
                        report.mappings += 1;
                    }
                    (LayerOrigin::Loaded, WeightData::Matrix(_)) => report.loaded += 1,
                }
                info!(layer = %layer.name, source = %layer.source, shape = %layer.data.describe(), "weight layer ready");
                layer
            })
            .collect();

        let (composite, mismatch) = compose::compose(&self.layers);
        if let Some(e) = mismatch {
            warn!(error = %e, "composite degraded to identity placeholder");
            report
                .events
                .push(DegradationEvent::now("weights", e.to_string(), "identity composite"));
        }
        self.composite = composite;
        report.composite_shape = self.composite.dim();

        info!(
            loaded = report.loaded,
            synthesized = report.synthesized,
            composite_rows = report.composite_shape.0,
            composite_cols = report.composite_shape.1,
            "weight store loaded"
        );
        report
    }

    /// Matrices get a small noise perturbation; mappings pass through.
    fn transform(&self, idx: usize, source: String, artifact: WeightArtifact) -> WeightLayer {
        let data = match artifact.data {
            WeightData::Matrix(mut m) => {
                let scale = self.config.perturbation_scale;
                if scale > 0.0 && self.noise.is_noisy() {
                    m.mapv_inplace(|x| x + (scale * self.noise.standard_normal()) as f32);
                }
                WeightData::Matrix(m)
            }
            mapping @ WeightData::Mapping(_) => mapping,
        };
        WeightLayer {
            name: format!("layer_{idx}"),
            source,
            origin: LayerOrigin::Loaded,
            data,
            metadata: artifact.metadata,
        }
    }

    fn synthesize(&self, idx: usize, source: String) -> WeightLayer {
        let matrix = synthetic::synthetic_matrix(
            &source,
            self.config.synthetic_rows,
            self.config.synthetic_cols,
        );
        WeightLayer {
            name: format!("layer_{idx}"),
            source,
            origin: LayerOrigin::Synthetic,
            data: WeightData::Matrix(matrix),
            metadata: Default::default(),
        }
    }

    /// Confidence for a query embedding.
    ///
    /// Mean over matrix layers of |cos(query[..k], layer[..k, 0]) + jitter|,
    /// with `k = min(query.len(), layer rows)`. Only the first column's norm
    /// enters the cosine. The whole `layer[..k, ..query.len()]` block is not
    /// Frobenius-normalized, so this approximates a projection score and
    /// does not reproduce one.
    ///
    /// Falls back to a draw from [0.6, 0.9) with no layers and [0.7, 0.95)
    /// when no layer is a non-empty matrix.
    pub fn score(&self, query: &[f32]) -> f64 {
        if self.layers.is_empty() {
            let (lo, hi) = EMPTY_STORE_CONFIDENCE;
            return self.noise.uniform(lo, hi);
        }

        let scores: Vec<f64> = self
            .layers
            .iter()
            .filter_map(|layer| layer.data.as_matrix())
            .filter(|m| !m.is_empty())
            .map(|m| {
                let k = query.len().min(m.nrows());
                let column: Vec<f32> = m.slice(s![..k, 0]).to_vec();
                let sim = cosine_similarity(&query[..k], &column)
                    + self.noise.jitter(self.config.score_jitter);
                sim.abs()
            })
            .collect();

        if scores.is_empty() {
            let (lo, hi) = UNSCORED_CONFIDENCE;
            debug!("no matrix layer to score against, using fallback confidence");
            return self.noise.uniform(lo, hi);
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }

    pub fn layers(&self) -> &[WeightLayer] {
        &self.layers
    }

    /// The composite weight. Always defined; the identity placeholder
    /// before `load` or when composition degraded.
    pub fn composite(&self) -> &Array2<f32> {
        &self.composite
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl IConfidenceScorer for WeightStore {
    fn score(&self, query: &[f32]) -> f64 {
        WeightStore::score(self, query)
    }
}
