//! GetMemberHistoryHandler - Query handler for a member's financial history.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::membership::{MembershipError, Transaction};
use crate::ports::{MemberRepository, TransactionLog};

/// Query for one member's transactions, most recent first.
#[derive(Debug, Clone)]
pub struct GetMemberHistoryQuery {
    pub member_id: MemberId,
}

/// Handler reconstructing a member's financial history from the ledger.
pub struct GetMemberHistoryHandler {
    repository: Arc<dyn MemberRepository>,
    log: Arc<dyn TransactionLog>,
}

impl GetMemberHistoryHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, log: Arc<dyn TransactionLog>) -> Self {
        Self { repository, log }
    }

    pub async fn handle(
        &self,
        query: GetMemberHistoryQuery,
    ) -> Result<Vec<Transaction>, MembershipError> {
        // Distinguish "unknown member" from "member with no history"
        if self
            .repository
            .find_by_id(&query.member_id)
            .await?
            .is_none()
        {
            return Err(MembershipError::not_found(query.member_id));
        }

        Ok(self.log.list_for_member(&query.member_id).await?)
    }
}
