//! Axum router configuration for report endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_lifecycle_totals, get_report_figures, ReportsAppState};

/// Create the reports router.
///
/// # Routes (any authenticated principal)
///
/// - `GET /` - Dashboard report figures (`?as_of=` optional)
/// - `GET /lifecycle` - Member counts by lifecycle status
pub fn reports_router() -> Router<ReportsAppState> {
    Router::new()
        .route("/", get(get_report_figures))
        .route("/lifecycle", get(get_lifecycle_totals))
}
