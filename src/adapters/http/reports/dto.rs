//! HTTP DTOs for report endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::{LifecycleTotals, MonthlyRevenue, ReportFigures};

/// Query parameters for the report figures endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFiguresParams {
    /// Reference date for the expiring-soon window. Defaults to the start
    /// of today when absent.
    pub as_of: Option<DateTime<Utc>>,
}

/// Response for the reports dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ReportFiguresResponse {
    /// Members with status Active.
    pub active_count: u64,
    /// Sum of all transaction amounts, in cents.
    pub total_revenue_cents: i64,
    /// Active members expiring within 30 days of the reference date.
    pub expiring_soon_count: u64,
    /// Revenue per calendar month, per the configured order and limit.
    pub monthly_revenue: Vec<MonthlyRevenueResponse>,
}

/// One month's revenue bucket.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRevenueResponse {
    /// Bucket key in `YYYY-MM` form.
    pub month: String,
    /// Summed amounts for the month, in cents.
    pub total_cents: i64,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(bucket: MonthlyRevenue) -> Self {
        Self {
            month: bucket.month,
            total_cents: bucket.total.as_i64(),
        }
    }
}

impl From<ReportFigures> for ReportFiguresResponse {
    fn from(figures: ReportFigures) -> Self {
        Self {
            active_count: figures.active_count,
            total_revenue_cents: figures.total_revenue.as_i64(),
            expiring_soon_count: figures.expiring_soon_count,
            monthly_revenue: figures
                .monthly_revenue
                .into_iter()
                .map(MonthlyRevenueResponse::from)
                .collect(),
        }
    }
}

/// Response for the lifecycle flow overview.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleTotalsResponse {
    pub total: u64,
    pub active: u64,
    pub cancelled: u64,
}

impl From<LifecycleTotals> for LifecycleTotalsResponse {
    fn from(totals: LifecycleTotals) -> Self {
        Self {
            total: totals.total,
            active: totals.active,
            cancelled: totals.cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Cents;

    #[test]
    fn report_figures_response_converts() {
        let figures = ReportFigures {
            active_count: 4,
            total_revenue: Cents::new(23_000),
            expiring_soon_count: 1,
            monthly_revenue: vec![MonthlyRevenue {
                month: "2026-08".to_string(),
                total: Cents::new(9000),
            }],
        };

        let response = ReportFiguresResponse::from(figures);
        assert_eq!(response.total_revenue_cents, 23_000);
        assert_eq!(response.monthly_revenue.len(), 1);
        assert_eq!(response.monthly_revenue[0].total_cents, 9000);
    }

    #[test]
    fn params_deserialize_with_and_without_as_of() {
        let params: ReportFiguresParams =
            serde_json::from_str(r#"{"as_of":"2026-08-06T00:00:00Z"}"#).unwrap();
        assert!(params.as_of.is_some());

        let params: ReportFiguresParams = serde_json::from_str("{}").unwrap();
        assert!(params.as_of.is_none());
    }
}
