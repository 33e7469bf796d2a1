use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Full embedding dimensions shared by the whole index.
    pub dimensions: usize,
    /// Leading characters mapped to code points.
    pub codepoint_prefix: usize,
    /// Every component is divided by this before it leaves the embedder.
    pub scale_divisor: f32,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            codepoint_prefix: defaults::DEFAULT_CODEPOINT_PREFIX,
            scale_divisor: defaults::DEFAULT_SCALE_DIVISOR,
        }
    }
}
