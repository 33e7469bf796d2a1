//! # taxlens-core
//!
//! Foundation crate for the taxlens compliance engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TaxlensConfig;
pub use errors::{TaxlensError, TaxlensResult};
pub use models::{
    ComplianceStatus, DocumentFragment, Explanation, InvoiceRecord, Issue, IssueType,
    IssueValue, ProcessResult, ScoreBreakdown, SearchHit, Severity,
};
