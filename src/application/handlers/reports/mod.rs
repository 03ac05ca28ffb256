//! Report query handlers. All read-only.

mod get_lifecycle_totals;
mod get_report_figures;

pub use get_lifecycle_totals::{GetLifecycleTotalsHandler, GetLifecycleTotalsQuery};
pub use get_report_figures::{GetReportFiguresHandler, GetReportFiguresQuery};
