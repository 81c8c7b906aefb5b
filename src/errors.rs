use thiserror::Error;
use uuid::Uuid;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("project not found: {0}")]
    NotFound(Uuid),
    #[error("project is closed: {0}")]
    ProjectClosed(Uuid),
    #[error("project already closed: {0}")]
    AlreadyClosed(Uuid),
    #[error("duplicate project id: {0}")]
    DuplicateId(Uuid),
}

impl LedgerError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
