//! Code-point embedding provider.
//!
//! The first `prefix` characters of the text map to their Unicode code
//! points (zero-padded when the text is shorter). The remaining slots are
//! filled with noise bytes. Every component is then divided by the scale
//! divisor (255 by default).
//!
//! Only the prefix is reproducible; the tail is whatever the noise source
//! yields (all zeros under `Deterministic`).

use std::sync::Arc;

use taxlens_core::config::{defaults, EmbeddingConfig};
use taxlens_core::errors::{EmbeddingError, TaxlensResult};
use taxlens_core::traits::{IEmbeddingProvider, INoiseSource};

pub struct CodepointEmbedder {
    dimensions: usize,
    prefix: usize,
    scale_divisor: f32,
    noise: Arc<dyn INoiseSource>,
}

impl CodepointEmbedder {
    pub fn new(dimensions: usize, noise: Arc<dyn INoiseSource>) -> Self {
        Self::with_prefix(dimensions, defaults::DEFAULT_CODEPOINT_PREFIX, noise)
    }

    pub fn with_prefix(dimensions: usize, prefix: usize, noise: Arc<dyn INoiseSource>) -> Self {
        Self {
            dimensions,
            prefix,
            scale_divisor: defaults::DEFAULT_SCALE_DIVISOR,
            noise,
        }
    }

    pub fn from_config(config: &EmbeddingConfig, noise: Arc<dyn INoiseSource>) -> Self {
        Self {
            dimensions: config.dimensions,
            prefix: config.codepoint_prefix,
            scale_divisor: config.scale_divisor,
            noise,
        }
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix
    }

    /// Unscaled vector: code points, zero padding, then noise bytes.
    pub fn raw(&self, text: &str, dims: usize) -> TaxlensResult<Vec<f32>> {
        if dims < self.prefix {
            return Err(EmbeddingError::DimensionsBelowPrefix {
                requested: dims,
                prefix: self.prefix,
            }
            .into());
        }

        let mut vec = Vec::with_capacity(dims);
        vec.extend(text.chars().take(self.prefix).map(|c| c as u32 as f32));
        vec.resize(self.prefix, 0.0);
        vec.extend((self.prefix..dims).map(|_| self.noise.byte() as f32));
        Ok(vec)
    }

    /// Embed at an explicit dimension, every component divided by the scale divisor.
    pub fn embed_dims(&self, text: &str, dims: usize) -> TaxlensResult<Vec<f32>> {
        let mut vec = self.raw(text, dims)?;
        for v in &mut vec {
            *v /= self.scale_divisor;
        }
        Ok(vec)
    }
}

impl IEmbeddingProvider for CodepointEmbedder {
    fn embed(&self, text: &str) -> TaxlensResult<Vec<f32>> {
        self.embed_dims(text, self.dimensions)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "codepoint"
    }
}
