//! Facade that the presentation layer drives.
//!
//! Owns the project registry and the startup configuration; initialized at
//! application start and injected wherever commands originate. Mutation
//! goes through `&mut self`, so the borrow checker serializes writers; a
//! shared deployment wraps the portfolio in its own lock.

use uuid::Uuid;

use crate::config::Config;
use crate::core::registry::ProjectRegistry;
use crate::core::services::{ProjectService, ReportService, TransactionService};
use crate::domain::project::{Project, ProjectDraft, ProjectStatus};
use crate::domain::report::ReportSummary;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::LedgerResult;

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    registry: ProjectRegistry,
    config: Config,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            registry: ProjectRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ProjectRegistry {
        &mut self.registry
    }

    /// Creates a project, falling back to the configured image placeholder
    /// when the draft does not carry one.
    pub fn create_project(&mut self, mut draft: ProjectDraft) -> LedgerResult<Project> {
        if draft.image_ref.is_none() {
            draft.image_ref = Some(self.config.default_image_ref.clone());
        }
        ProjectService::create(&mut self.registry, draft)
    }

    /// Records a transaction and returns it.
    pub fn record(
        &mut self,
        project_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        description: Option<String>,
    ) -> LedgerResult<Transaction> {
        TransactionService::record(&mut self.registry, project_id, kind, amount, description)
    }

    /// Records a transaction and returns the refreshed project, the way
    /// detail screens re-read state after a mutation.
    pub fn record_transaction(
        &mut self,
        project_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        description: Option<String>,
    ) -> LedgerResult<Project> {
        TransactionService::record(&mut self.registry, project_id, kind, amount, description)?;
        Ok(self.registry.get(project_id)?.clone())
    }

    pub fn close_project(&mut self, project_id: Uuid) -> LedgerResult<Project> {
        ProjectService::close(&mut self.registry, project_id)
    }

    pub fn project(&self, project_id: Uuid) -> LedgerResult<&Project> {
        self.registry.get(project_id)
    }

    pub fn active_projects(&self) -> impl Iterator<Item = &Project> {
        self.registry.list_by_status(ProjectStatus::Active)
    }

    pub fn closed_projects(&self) -> impl Iterator<Item = &Project> {
        self.registry.list_by_status(ProjectStatus::Closed)
    }

    pub fn summarize_active(&self) -> ReportSummary {
        ReportService::summarize(self.active_projects())
    }

    pub fn summarize_closed(&self) -> ReportSummary {
        ReportService::summarize(self.closed_projects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_inherit_the_configured_image_placeholder() {
        let config = Config {
            default_image_ref: "/studio-placeholder.png".into(),
            ..Config::default()
        };
        let mut portfolio = Portfolio::with_config(config);

        let project = portfolio
            .create_project(ProjectDraft::new("Casa", "Elena", 1000.0))
            .unwrap();
        assert_eq!(project.image_ref, "/studio-placeholder.png");
    }

    #[test]
    fn closed_projects_move_between_the_status_views() {
        let mut portfolio = Portfolio::new();
        let project = portfolio
            .create_project(ProjectDraft::new("Casa", "Elena", 1000.0))
            .unwrap();
        assert_eq!(portfolio.active_projects().count(), 1);
        assert_eq!(portfolio.closed_projects().count(), 0);

        portfolio.close_project(project.id).unwrap();
        assert_eq!(portfolio.active_projects().count(), 0);
        assert_eq!(portfolio.closed_projects().count(), 1);
        assert!(portfolio.project(project.id).is_ok());
    }

    #[test]
    fn record_transaction_returns_the_refreshed_project() {
        let mut portfolio = Portfolio::new();
        let project = portfolio
            .create_project(ProjectDraft::new("Casa", "Elena", 100_000.0))
            .unwrap();

        let refreshed = portfolio
            .record_transaction(project.id, TransactionKind::Expense, 25_000.0, None)
            .unwrap();
        assert_eq!(refreshed.expenses, 25_000.0);
        assert_eq!(refreshed.budget_used, 25);
    }
}
