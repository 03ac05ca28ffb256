//! ListTransactionsHandler - Query handler for the full ledger.

use std::sync::Arc;

use crate::domain::membership::{MembershipError, Transaction};
use crate::ports::TransactionLog;

/// Query for all transactions, most recent first.
#[derive(Debug, Clone, Default)]
pub struct ListTransactionsQuery {}

/// Handler returning the full ledger, reverse-chronological.
pub struct ListTransactionsHandler {
    log: Arc<dyn TransactionLog>,
}

impl ListTransactionsHandler {
    pub fn new(log: Arc<dyn TransactionLog>) -> Self {
        Self { log }
    }

    pub async fn handle(
        &self,
        _query: ListTransactionsQuery,
    ) -> Result<Vec<Transaction>, MembershipError> {
        Ok(self.log.list_recent_first().await?)
    }
}
