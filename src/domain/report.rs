use serde::{Deserialize, Serialize};

/// Aggregated totals across a set of projects, for external display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
}
