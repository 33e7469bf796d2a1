mod confidence;
mod detector;
mod embedding;
mod evidence;
mod noise;

pub use confidence::IConfidenceScorer;
pub use detector::IAnomalyDetector;
pub use embedding::IEmbeddingProvider;
pub use evidence::IEvidenceSearch;
pub use noise::INoiseSource;
