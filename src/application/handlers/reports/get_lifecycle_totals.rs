//! GetLifecycleTotalsHandler - Query handler for the flow overview.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{LifecycleTotals, ReportReader};

/// Query for member counts by lifecycle status.
#[derive(Debug, Clone, Default)]
pub struct GetLifecycleTotalsQuery {}

/// Handler for the flow overview counts. Pure read.
pub struct GetLifecycleTotalsHandler {
    reader: Arc<dyn ReportReader>,
}

impl GetLifecycleTotalsHandler {
    pub fn new(reader: Arc<dyn ReportReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetLifecycleTotalsQuery,
    ) -> Result<LifecycleTotals, DomainError> {
        self.reader.lifecycle_totals().await
    }
}
