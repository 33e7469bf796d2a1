//! ExplanationComposer: turns a detected issue into a scored, evidenced
//! explanation.

pub mod composer;
pub mod templates;

pub use composer::ExplanationComposer;
