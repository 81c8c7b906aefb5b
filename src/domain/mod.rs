//! Domain models for projects, transactions, and report summaries.

pub mod common;
pub mod project;
pub mod report;
pub mod transaction;

pub use common::{Displayable, Identifiable, NamedEntity};
pub use project::{Project, ProjectDraft, ProjectMetrics, ProjectStatus, DEFAULT_IMAGE_REF};
pub use report::ReportSummary;
pub use transaction::{Transaction, TransactionKind};
