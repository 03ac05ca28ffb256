//! Report reader port (read side / CQRS queries).
//!
//! Defines the contract for the dashboard and report aggregations. All
//! operations are pure reads consistent with the data visible at call
//! time; none may mutate state.

use crate::domain::foundation::{Cents, DomainError, Timestamp};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for report aggregations.
#[async_trait]
pub trait ReportReader: Send + Sync {
    /// Compute the report figures as of the given date.
    ///
    /// The expiring-soon window is `[as_of, as_of + 30 days]` inclusive
    /// and counts Active members only.
    async fn figures(&self, as_of: Timestamp) -> Result<ReportFigures, DomainError>;

    /// Member counts by lifecycle status for the flow overview.
    async fn lifecycle_totals(&self) -> Result<LifecycleTotals, DomainError>;
}

/// Aggregate figures for the reports dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFigures {
    /// Members with status Active.
    pub active_count: u64,

    /// Sum of all transaction amounts; empty ledger counts as zero.
    pub total_revenue: Cents,

    /// Active members whose end date falls in the 30-day window.
    pub expiring_soon_count: u64,

    /// Revenue bucketed by calendar month, ordered and truncated per the
    /// reports configuration.
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

/// One month's revenue bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Bucket key in `YYYY-MM` form.
    pub month: String,

    /// Summed transaction amounts for the month.
    pub total: Cents,
}

/// Member counts by lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleTotals {
    /// All members ever provisioned.
    pub total: u64,

    /// Members with status Active.
    pub active: u64,

    /// Members with status Cancelled.
    pub cancelled: u64,
}
