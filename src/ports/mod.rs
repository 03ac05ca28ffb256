//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MemberRepository` - Write side: atomic member + transaction units of work
//! - `TransactionLog` - Read side for the immutable ledger
//! - `ReportReader` - Read side for dashboard aggregations
//! - `UserDirectory` - Read-only account lookup for authentication

mod member_repository;
mod report_reader;
mod transaction_log;
mod user_directory;

pub use member_repository::MemberRepository;
pub use report_reader::{LifecycleTotals, MonthlyRevenue, ReportFigures, ReportReader};
pub use transaction_log::TransactionLog;
pub use user_directory::UserDirectory;
