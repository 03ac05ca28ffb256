//! PostgreSQL adapters.
//!
//! Each port gets one adapter backed by a shared `PgPool`. Row structs
//! derive `sqlx::FromRow` and convert into domain types via `TryFrom`.

mod bootstrap;
mod member_repository;
mod report_reader;
mod transaction_log;
mod user_directory;

pub use bootstrap::seed_demo_accounts;
pub use member_repository::PostgresMemberRepository;
pub use report_reader::PostgresReportReader;
pub use transaction_log::PostgresTransactionLog;
pub use user_directory::PostgresUserDirectory;
