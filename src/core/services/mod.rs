pub mod project_service;
pub mod report_service;
pub mod transaction_service;

pub use project_service::ProjectService;
pub use report_service::ReportService;
pub use transaction_service::TransactionService;
