//! Business logic for recording income and expense events.

use uuid::Uuid;

use crate::core::registry::ProjectRegistry;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::{LedgerError, LedgerResult};

/// Validates and applies income/expense events to a project.
///
/// This is the only path that mutates a project's cumulative totals.
pub struct TransactionService;

impl TransactionService {
    /// Records a transaction against an active project.
    ///
    /// All preconditions are checked before any state changes. The history
    /// append, the total bump, and the `budget_used` refresh happen inside
    /// a single registry update, so no caller can observe totals that
    /// disagree with the derived percentage.
    pub fn record(
        registry: &mut ProjectRegistry,
        project_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        description: Option<String>,
    ) -> LedgerResult<Transaction> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let project = registry.get(project_id)?;
        if !project.is_active() {
            return Err(LedgerError::ProjectClosed(project_id));
        }

        let transaction = Transaction::new(project_id, kind, amount, description);
        let record = transaction.clone();
        registry.update(project_id, |project| project.apply(transaction))?;
        tracing::debug!(project = %project_id, kind = %kind, amount, "recorded transaction");
        Ok(record)
    }

    /// Returns the project's ordered transaction history.
    pub fn history(registry: &ProjectRegistry, project_id: Uuid) -> LedgerResult<&[Transaction]> {
        Ok(registry.get(project_id)?.transactions.as_slice())
    }
}
