//! Read-only roll-ups across a project set.

use crate::domain::project::Project;
use crate::domain::report::ReportSummary;

pub struct ReportService;

impl ReportService {
    /// Sums income, expenses, and profit across the given projects. An
    /// empty sequence yields zeros. Trend figures are presentation
    /// concerns and are not derived here.
    pub fn summarize<'a, I>(projects: I) -> ReportSummary
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let mut summary = ReportSummary::default();
        for project in projects {
            summary.total_income += project.income;
            summary.total_expenses += project.expenses;
            summary.total_profit += project.profit();
        }
        summary
    }
}
