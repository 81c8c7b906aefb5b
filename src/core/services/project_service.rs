//! Project lifecycle: creation and closing.

use uuid::Uuid;

use crate::core::registry::ProjectRegistry;
use crate::domain::project::{Project, ProjectDraft, ProjectStatus, DEFAULT_IMAGE_REF};
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::{LedgerError, LedgerResult};

const OPENING_PAYMENT_NOTE: &str = "Initial payment";

/// Creates and closes projects. Closing is a state transition; the project
/// and its history stay retrievable afterwards.
pub struct ProjectService;

impl ProjectService {
    /// Seeds a new active project from the draft and inserts it into the
    /// registry. A positive initial payment is recorded as an opening
    /// income transaction so the totals always equal the history sums.
    pub fn create(registry: &mut ProjectRegistry, draft: ProjectDraft) -> LedgerResult<Project> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(LedgerError::invalid_input("name", "must not be empty"));
        }
        let client = draft.client.trim();
        if client.is_empty() {
            return Err(LedgerError::invalid_input("client", "must not be empty"));
        }
        if !draft.budget.is_finite() || draft.budget <= 0.0 {
            return Err(LedgerError::invalid_input(
                "budget",
                "must be a positive number",
            ));
        }
        if let Some(payment) = draft.initial_payment {
            if !payment.is_finite() || payment < 0.0 {
                return Err(LedgerError::invalid_input(
                    "initial_payment",
                    "must be zero or positive",
                ));
            }
        }

        let image_ref = draft
            .image_ref
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_REF.to_string());
        let mut project = Project::new(name, client, draft.budget, image_ref);
        if let Some(payment) = draft.initial_payment {
            if payment > 0.0 {
                project.apply(Transaction::new(
                    project.id,
                    TransactionKind::Income,
                    payment,
                    Some(OPENING_PAYMENT_NOTE.into()),
                ));
            }
        }

        let id = registry.add(project)?;
        tracing::info!(project = %id, name = %name, "created project");
        Ok(registry.get(id)?.clone())
    }

    /// Transitions an active project to closed, preserving its totals and
    /// transaction history.
    pub fn close(registry: &mut ProjectRegistry, id: Uuid) -> LedgerResult<Project> {
        let project = registry.get(id)?;
        if !project.is_active() {
            return Err(LedgerError::AlreadyClosed(id));
        }
        registry.update(id, |project| project.status = ProjectStatus::Closed)?;
        tracing::info!(project = %id, "closed project");
        Ok(registry.get(id)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_seeds_an_active_project_with_zero_totals() {
        let mut registry = ProjectRegistry::new();
        let project = ProjectService::create(
            &mut registry,
            ProjectDraft::new("Casa del Sol", "Elena", 160_000.0).with_initial_payment(0.0),
        )
        .unwrap();

        assert_eq!(project.income, 0.0);
        assert_eq!(project.expenses, 0.0);
        assert_eq!(project.budget_used, 0);
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.transactions.is_empty());
        assert_eq!(project.image_ref, DEFAULT_IMAGE_REF);
    }

    #[test]
    fn positive_initial_payment_becomes_the_opening_transaction() {
        let mut registry = ProjectRegistry::new();
        let project = ProjectService::create(
            &mut registry,
            ProjectDraft::new("Oficinas Innova", "Tech Solutions Inc.", 200_000.0)
                .with_initial_payment(50_000.0),
        )
        .unwrap();

        assert_eq!(project.income, 50_000.0);
        assert_eq!(project.transactions.len(), 1);
        let opening = &project.transactions[0];
        assert_eq!(opening.kind, TransactionKind::Income);
        assert_eq!(opening.amount, 50_000.0);
        assert_eq!(opening.description.as_deref(), Some(OPENING_PAYMENT_NOTE));
    }

    #[test]
    fn create_rejects_bad_input_naming_the_field() {
        let mut registry = ProjectRegistry::new();

        let cases: Vec<(ProjectDraft, &str)> = vec![
            (ProjectDraft::new("  ", "Elena", 1000.0), "name"),
            (ProjectDraft::new("Casa", "", 1000.0), "client"),
            (ProjectDraft::new("Casa", "Elena", 0.0), "budget"),
            (ProjectDraft::new("Casa", "Elena", -5.0), "budget"),
            (ProjectDraft::new("Casa", "Elena", f64::NAN), "budget"),
            (
                ProjectDraft::new("Casa", "Elena", 1000.0).with_initial_payment(-1.0),
                "initial_payment",
            ),
        ];
        for (draft, expected_field) in cases {
            let err = ProjectService::create(&mut registry, draft)
                .expect_err("invalid draft must fail");
            match err {
                LedgerError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
                other => panic!("expected invalid input, got {other:?}"),
            }
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn close_preserves_totals_and_history() {
        let mut registry = ProjectRegistry::new();
        let project = ProjectService::create(
            &mut registry,
            ProjectDraft::new("Residencia Los Pinos", "Ricardo Vargas", 120_000.0)
                .with_initial_payment(60_000.0),
        )
        .unwrap();

        let closed = ProjectService::close(&mut registry, project.id).unwrap();
        assert_eq!(closed.status, ProjectStatus::Closed);
        assert_eq!(closed.income, 60_000.0);
        assert_eq!(closed.transactions.len(), 1);

        // Still retrievable with its history after closing.
        let fetched = registry.get(project.id).unwrap();
        assert_eq!(fetched.status, ProjectStatus::Closed);
        assert_eq!(fetched.transactions.len(), 1);
    }

    #[test]
    fn close_fails_for_unknown_or_already_closed() {
        let mut registry = ProjectRegistry::new();
        let err = ProjectService::close(&mut registry, Uuid::new_v4())
            .expect_err("unknown project must fail");
        assert!(matches!(err, LedgerError::NotFound(_)));

        let project = ProjectService::create(
            &mut registry,
            ProjectDraft::new("Casa", "Elena", 1000.0),
        )
        .unwrap();
        ProjectService::close(&mut registry, project.id).unwrap();
        let err = ProjectService::close(&mut registry, project.id)
            .expect_err("second close must fail");
        assert!(matches!(err, LedgerError::AlreadyClosed(_)));
    }

    #[test]
    fn explicit_image_ref_wins_over_the_placeholder() {
        let mut registry = ProjectRegistry::new();
        let project = ProjectService::create(
            &mut registry,
            ProjectDraft::new("Casa", "Elena", 1000.0).with_image_ref("/modern-house-exterior.png"),
        )
        .unwrap();
        assert_eq!(project.image_ref, "/modern-house-exterior.png");
    }
}
