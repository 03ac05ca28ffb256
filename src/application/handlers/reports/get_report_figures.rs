//! GetReportFiguresHandler - Query handler for the reports dashboard.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{ReportFigures, ReportReader};

/// Query for report figures as of a given date.
#[derive(Debug, Clone)]
pub struct GetReportFiguresQuery {
    pub as_of: Timestamp,
}

/// Handler computing the dashboard aggregates. Pure read.
pub struct GetReportFiguresHandler {
    reader: Arc<dyn ReportReader>,
}

impl GetReportFiguresHandler {
    pub fn new(reader: Arc<dyn ReportReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetReportFiguresQuery,
    ) -> Result<ReportFigures, DomainError> {
        self.reader.figures(query.as_of).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Cents;
    use crate::ports::{LifecycleTotals, MonthlyRevenue};
    use async_trait::async_trait;

    struct MockReportReader {
        figures: ReportFigures,
    }

    #[async_trait]
    impl ReportReader for MockReportReader {
        async fn figures(&self, _as_of: Timestamp) -> Result<ReportFigures, DomainError> {
            Ok(self.figures.clone())
        }

        async fn lifecycle_totals(&self) -> Result<LifecycleTotals, DomainError> {
            Ok(LifecycleTotals::default())
        }
    }

    #[tokio::test]
    async fn returns_reader_figures() {
        let figures = ReportFigures {
            active_count: 12,
            total_revenue: Cents::new(108_000),
            expiring_soon_count: 3,
            monthly_revenue: vec![MonthlyRevenue {
                month: "2026-07".to_string(),
                total: Cents::new(18_000),
            }],
        };

        let handler = GetReportFiguresHandler::new(Arc::new(MockReportReader {
            figures: figures.clone(),
        }));

        let result = handler
            .handle(GetReportFiguresQuery {
                as_of: Timestamp::start_of_today(),
            })
            .await
            .unwrap();

        assert_eq!(result, figures);
    }
}
