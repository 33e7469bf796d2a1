// Single source of truth for all default values.

// --- Weights ---
pub const DEFAULT_MAX_ARTIFACTS: usize = 3;
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "json";
pub const DEFAULT_SYNTHETIC_ROWS: usize = 256;
pub const DEFAULT_SYNTHETIC_COLS: usize = 512;
pub const DEFAULT_PERTURBATION_SCALE: f64 = 0.01;
pub const DEFAULT_SYNTHETIC_SEED_MODULUS: u64 = 1000;
pub const DEFAULT_SCORE_JITTER: f64 = 0.05;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_CODEPOINT_PREFIX: usize = 100;
pub const DEFAULT_SCALE_DIVISOR: f32 = 255.0;

// --- Retrieval ---
pub const DEFAULT_CANDIDATE_WINDOW: usize = 50;
pub const DEFAULT_JITTER_AMPLITUDE: f64 = 0.05;
pub const DEFAULT_CHUNKS_PER_DOCUMENT: usize = 50;
pub const DEFAULT_CHUNK_CHARS: usize = 512;

// --- Explanation ---
pub const DEFAULT_EVIDENCE_TOP_K: usize = 3;
pub const DEFAULT_CRITICAL_SEVERITY_WEIGHT: f64 = 0.85;
pub const DEFAULT_STANDARD_SEVERITY_WEIGHT: f64 = 0.65;
pub const DEFAULT_SCORE_PRECISION: u32 = 4;

// --- Noise ---
pub const DEFAULT_NOISE_ENABLED: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
