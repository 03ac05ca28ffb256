//! PostgreSQL implementation of ReportReader.
//!
//! All aggregation happens in SQL; the adapter only shapes rows into the
//! port's figures. The monthly series order and limit come from
//! [`ReportsConfig`], not from hardcoded query text.

use crate::config::{ReportsConfig, SeriesOrder};
use crate::domain::foundation::{Cents, DomainError, ErrorCode, Timestamp};
use crate::ports::{LifecycleTotals, MonthlyRevenue, ReportFigures, ReportReader};
use async_trait::async_trait;
use sqlx::PgPool;

/// Days ahead counted as "expiring soon".
const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// PostgreSQL implementation of the ReportReader port.
pub struct PostgresReportReader {
    pool: PgPool,
    config: ReportsConfig,
}

impl PostgresReportReader {
    /// Creates a new PostgresReportReader with the given pool and
    /// reports configuration.
    pub fn new(pool: PgPool, config: ReportsConfig) -> Self {
        Self { pool, config }
    }
}

/// Row for the monthly revenue query.
#[derive(Debug, sqlx::FromRow)]
struct MonthlyRevenueRow {
    month: String,
    total: i64,
}

impl From<MonthlyRevenueRow> for MonthlyRevenue {
    fn from(row: MonthlyRevenueRow) -> Self {
        MonthlyRevenue {
            month: row.month,
            total: Cents::new(row.total),
        }
    }
}

fn monthly_series_query(order: SeriesOrder) -> &'static str {
    match order {
        SeriesOrder::OldestFirst => {
            r#"
            SELECT to_char(date, 'YYYY-MM') AS month, SUM(amount_cents)::BIGINT AS total
            FROM transactions
            GROUP BY to_char(date, 'YYYY-MM')
            ORDER BY month ASC
            LIMIT $1
            "#
        }
        SeriesOrder::NewestFirst => {
            r#"
            SELECT to_char(date, 'YYYY-MM') AS month, SUM(amount_cents)::BIGINT AS total
            FROM transactions
            GROUP BY to_char(date, 'YYYY-MM')
            ORDER BY month DESC
            LIMIT $1
            "#
        }
    }
}

#[async_trait]
impl ReportReader for PostgresReportReader {
    async fn figures(&self, as_of: Timestamp) -> Result<ReportFigures, DomainError> {
        let window_end = as_of.add_days(EXPIRING_SOON_WINDOW_DAYS);

        // Active and expiring-soon counts in one pass; the window is
        // inclusive on both ends and excludes cancelled members.
        let (active_count, expiring_soon_count): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'active') AS active,
                COUNT(*) FILTER (
                    WHERE status = 'active'
                      AND end_date >= $1
                      AND end_date <= $2
                ) AS expiring
            FROM members
            "#,
        )
        .bind(as_of.as_datetime())
        .bind(window_end.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to get member counts: {}", e),
            )
        })?;

        // Empty ledger sums to zero, never NULL.
        let (total_revenue,): (i64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(amount_cents), 0)::BIGINT FROM transactions
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to sum revenue: {}", e),
            )
        })?;

        let monthly_rows: Vec<MonthlyRevenueRow> =
            sqlx::query_as(monthly_series_query(self.config.monthly_series_order))
                .bind(i64::from(self.config.monthly_series_limit))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to get monthly revenue: {}", e),
                    )
                })?;

        Ok(ReportFigures {
            active_count: active_count as u64,
            total_revenue: Cents::new(total_revenue),
            expiring_soon_count: expiring_soon_count as u64,
            monthly_revenue: monthly_rows.into_iter().map(MonthlyRevenue::from).collect(),
        })
    }

    async fn lifecycle_totals(&self) -> Result<LifecycleTotals, DomainError> {
        let (total, active, cancelled): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'active') AS active,
                COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled
            FROM members
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to get lifecycle totals: {}", e),
            )
        })?;

        Ok(LifecycleTotals {
            total: total as u64,
            active: active as u64,
            cancelled: cancelled as u64,
        })
    }
}
