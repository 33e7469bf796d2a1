mod degradation_event;
mod explanation;
mod fragment;
mod issue;
mod process_result;
mod record;

pub use degradation_event::DegradationEvent;
pub use explanation::{Explanation, ScoreBreakdown};
pub use fragment::{DocumentFragment, SearchHit};
pub use issue::{Issue, IssueType, IssueValue, Severity};
pub use process_result::{ComplianceStatus, ProcessResult};
pub use record::InvoiceRecord;
