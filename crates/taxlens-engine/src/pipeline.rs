//! Pipeline: wires the weight store, the vector index and the detector
//! together and processes records.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use taxlens_core::config::TaxlensConfig;
use taxlens_core::models::{DegradationEvent, InvoiceRecord, ProcessResult};
use taxlens_core::traits::{IAnomalyDetector, IEmbeddingProvider, INoiseSource};
use taxlens_embeddings::{noise_from_config, CodepointEmbedder};
use taxlens_retrieval::{ExplanationComposer, IndexReport, ReferenceCorpus, VectorIndex};
use taxlens_weights::{LoadReport, WeightSource, WeightStore};
use tracing::{info, warn};

use crate::detector::RuleBasedDetector;

/// Snapshot of what `init` built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub detector: String,
    pub noise: String,
    pub fragments: usize,
    pub documents: usize,
    pub artifacts_loaded: usize,
    pub artifacts_synthesized: usize,
    pub composite_shape: (usize, usize),
    pub degradations: usize,
}

/// Configures and initializes a [`Pipeline`].
///
/// Anything not set explicitly is derived from the config: the noise source
/// from `noise`, weights from `weights.artifact_dir`, the corpus from
/// `retrieval.books_dir`.
pub struct PipelineBuilder {
    config: TaxlensConfig,
    noise: Option<Arc<dyn INoiseSource>>,
    detector: Option<Arc<dyn IAnomalyDetector>>,
    weights: Option<WeightSource>,
    corpus: Option<ReferenceCorpus>,
}

impl PipelineBuilder {
    pub fn new(config: TaxlensConfig) -> Self {
        Self {
            config,
            noise: None,
            detector: None,
            weights: None,
            corpus: None,
        }
    }

    pub fn noise(mut self, noise: Arc<dyn INoiseSource>) -> Self {
        self.noise = Some(noise);
        self
    }

    pub fn detector(mut self, detector: Arc<dyn IAnomalyDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn weights(mut self, source: WeightSource) -> Self {
        self.weights = Some(source);
        self
    }

    pub fn corpus(mut self, corpus: ReferenceCorpus) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Load weights, then build the index. Never fails; problems degrade to
    /// fallback scores or the builtin corpus and show up in the reports.
    pub fn build(self) -> Pipeline {
        let config = self.config;
        let noise = self.noise.unwrap_or_else(|| noise_from_config(&config.noise));
        let detector = self
            .detector
            .unwrap_or_else(|| Arc::new(RuleBasedDetector::new()));

        let embedder: Arc<dyn IEmbeddingProvider> =
            Arc::new(CodepointEmbedder::from_config(&config.embedding, noise.clone()));

        let source = self.weights.unwrap_or_else(|| match &config.weights.artifact_dir {
            Some(dir) => WeightSource::Directory(PathBuf::from(dir)),
            None => WeightSource::Empty,
        });
        let mut weights = WeightStore::new(config.weights.clone(), noise.clone());
        let load_report = weights.load(source);

        let (corpus, corpus_event) = match self.corpus {
            Some(corpus) => (corpus, None),
            None => ReferenceCorpus::from_config(&config.retrieval),
        };
        let mut index = VectorIndex::new(config.retrieval.clone(), embedder.clone(), noise.clone());
        let mut index_report = index.build(&corpus);
        index_report.events.extend(corpus_event);

        info!(
            detector = detector.name(),
            noise = noise.name(),
            fragments = index_report.fragments,
            layers = weights.len(),
            "pipeline initialized"
        );

        Pipeline {
            config,
            noise,
            embedder,
            detector,
            weights: Arc::new(weights),
            index: Arc::new(index),
            load_report,
            index_report,
        }
    }
}

/// The compliance pipeline.
///
/// Immutable after `init`; `process` takes `&self` and may be called from
/// many threads at once.
pub struct Pipeline {
    config: TaxlensConfig,
    noise: Arc<dyn INoiseSource>,
    embedder: Arc<dyn IEmbeddingProvider>,
    detector: Arc<dyn IAnomalyDetector>,
    weights: Arc<WeightStore>,
    index: Arc<VectorIndex>,
    load_report: LoadReport,
    index_report: IndexReport,
}

impl Pipeline {
    pub fn builder(config: TaxlensConfig) -> PipelineBuilder {
        PipelineBuilder::new(config)
    }

    /// Build a pipeline entirely from `config`.
    pub fn init(config: TaxlensConfig) -> Self {
        PipelineBuilder::new(config).build()
    }

    /// Detect issues on `record` and explain each one, in order.
    pub fn process(&self, record: &InvoiceRecord) -> ProcessResult {
        let issues = self.detector.detect(record);
        if issues.is_empty() {
            info!(invoice = record.label(), "invoice is compliant");
            return ProcessResult::compliant();
        }

        warn!(invoice = record.label(), issues = issues.len(), "compliance issues found");
        let composer = ExplanationComposer::new(
            self.index.as_ref(),
            self.weights.as_ref(),
            self.embedder.as_ref(),
            &self.config.explanation,
        );
        let explanations = issues.iter().map(|issue| composer.explain(issue)).collect();
        ProcessResult::non_compliant(issues, explanations)
    }

    /// `process` over every record, order preserved.
    pub fn process_batch(&self, records: &[InvoiceRecord]) -> Vec<ProcessResult> {
        records.iter().map(|r| self.process(r)).collect()
    }

    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            detector: self.detector.name().to_string(),
            noise: self.noise.name().to_string(),
            fragments: self.index.len(),
            documents: self.index_report.documents,
            artifacts_loaded: self.load_report.loaded,
            artifacts_synthesized: self.load_report.synthesized,
            composite_shape: self.weights.composite().dim(),
            degradations: self.degradations().count(),
        }
    }

    /// Every fallback taken during `init`.
    pub fn degradations(&self) -> impl Iterator<Item = &DegradationEvent> {
        self.load_report
            .events
            .iter()
            .chain(self.index_report.events.iter())
    }

    pub fn weights(&self) -> &Arc<WeightStore> {
        &self.weights
    }

    pub fn index(&self) -> &Arc<VectorIndex> {
        &self.index
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn index_report(&self) -> &IndexReport {
        &self.index_report
    }

    pub fn config(&self) -> &TaxlensConfig {
        &self.config
    }
}
