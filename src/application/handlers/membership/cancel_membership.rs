//! CancelMembershipHandler - Command handler for cancelling memberships.

use std::sync::Arc;

use crate::domain::foundation::{Cents, MemberId, Timestamp, TransactionId};
use crate::domain::membership::{LifecycleAction, Member, MembershipError, Transaction};
use crate::ports::MemberRepository;

/// Command to cancel a membership.
#[derive(Debug, Clone)]
pub struct CancelMembershipCommand {
    pub member_id: MemberId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelMembershipResult {
    pub member: Member,
    pub transaction: Transaction,
}

/// Handler for cancelling memberships.
///
/// Cancellation is idempotent on status: a second cancel leaves the
/// member Cancelled and still records a zero-amount transaction for the
/// audit trail. Dates are never changed.
pub struct CancelMembershipHandler {
    repository: Arc<dyn MemberRepository>,
}

impl CancelMembershipHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CancelMembershipCommand,
    ) -> Result<CancelMembershipResult, MembershipError> {
        // 1. Find the member
        let mut member = self
            .repository
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(cmd.member_id))?;

        // 2. Cancel (domain logic)
        member.cancel()?;

        // 3. Record the zero-amount paired transaction
        let transaction = Transaction::record(
            TransactionId::new(),
            member.id,
            LifecycleAction::Cancel,
            Cents::zero(),
            "Cancelled".to_string(),
            Timestamp::now(),
        );

        // 4. Persist both atomically
        self.repository.update(&member, &transaction).await?;

        Ok(CancelMembershipResult {
            member,
            transaction,
        })
    }
}
