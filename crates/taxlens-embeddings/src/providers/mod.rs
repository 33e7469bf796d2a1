//! Embedding providers.

pub mod codepoint;

pub use codepoint::CodepointEmbedder;
