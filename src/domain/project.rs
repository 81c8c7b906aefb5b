//! Domain model for tracked projects and their derived financial metrics.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Placeholder shown by the presentation layer when no image was supplied.
pub const DEFAULT_IMAGE_REF: &str = "/modern-architecture-concept.png";

/// A tracked engagement with an authorized budget, cumulative totals, and
/// a one-directional active → closed lifecycle.
///
/// `income` and `expenses` always equal the sums of the matching
/// transaction kinds in `transactions`, and `budget_used` is recomputed on
/// every mutation so reads never observe stale derived state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client: String,
    pub budget: f64,
    pub income: f64,
    pub expenses: f64,
    pub budget_used: u8,
    pub status: ProjectStatus,
    pub image_ref: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        client: impl Into<String>,
        budget: f64,
        image_ref: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            client: client.into(),
            budget,
            income: 0.0,
            expenses: 0.0,
            budget_used: 0,
            status: ProjectStatus::Active,
            image_ref: image_ref.into(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Derives the current financial metrics from the stored totals.
    pub fn metrics(&self) -> ProjectMetrics {
        ProjectMetrics::from_totals(self.income, self.expenses, self.budget)
    }

    pub fn profit(&self) -> f64 {
        self.income - self.expenses
    }

    pub fn is_rentable(&self) -> bool {
        self.metrics().rentable
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, ProjectStatus::Active)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Appends a transaction, bumps the matching cumulative total, and
    /// refreshes `budget_used` in one step. Callers validate first; totals
    /// and derived state never disagree between statements observable from
    /// outside the registry.
    pub(crate) fn apply(&mut self, transaction: Transaction) {
        match transaction.kind {
            TransactionKind::Income => self.income += transaction.amount,
            TransactionKind::Expense => self.expenses += transaction.amount,
        }
        self.transactions.push(transaction);
        self.budget_used = self.metrics().budget_used_pct;
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Project {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Project {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Lifecycle state of a project. Closed projects never return to active.
pub enum ProjectStatus {
    Active,
    Closed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Closed => "Closed",
        };
        f.write_str(label)
    }
}

/// Input for creating a project. Optional fields carry explicit defaults:
/// a missing initial payment means zero, a missing image falls back to the
/// configured placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub client: String,
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>, client: impl Into<String>, budget: f64) -> Self {
        Self {
            name: name.into(),
            client: client.into(),
            budget,
            initial_payment: None,
            image_ref: None,
        }
    }

    pub fn with_initial_payment(mut self, payment: f64) -> Self {
        self.initial_payment = Some(payment);
        self
    }

    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

/// Derived metrics for a single project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectMetrics {
    pub profit: f64,
    pub rentable: bool,
    pub budget_used_pct: u8,
}

impl ProjectMetrics {
    /// Pure derivation from cumulative totals. Break-even is not rentable,
    /// and the utilization percentage is rounded then clamped to [0, 100].
    pub fn from_totals(income: f64, expenses: f64, budget: f64) -> Self {
        let profit = income - expenses;
        let budget_used_pct = if budget > 0.0 {
            ((expenses / budget) * 100.0).round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        Self {
            profit,
            rentable: profit > 0.0,
            budget_used_pct,
        }
    }
}
