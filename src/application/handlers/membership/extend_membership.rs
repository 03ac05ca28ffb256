//! ExtendMembershipHandler - Command handler for extending memberships.

use std::sync::Arc;

use crate::domain::foundation::{MemberId, Timestamp, TransactionId};
use crate::domain::membership::{
    LifecycleAction, Member, MembershipError, MembershipPlan, Transaction,
};
use crate::ports::MemberRepository;

/// Command to extend a membership.
///
/// `extension_type` is the raw plan input; unknown values fall back to
/// the six-month default policy.
#[derive(Debug, Clone)]
pub struct ExtendMembershipCommand {
    pub member_id: MemberId,
    pub extension_type: String,
}

/// Result of a successful extension.
#[derive(Debug, Clone)]
pub struct ExtendMembershipResult {
    pub member: Member,
    pub transaction: Transaction,
}

/// Handler for extending memberships.
///
/// The extension base is the later of the current end date and today, so
/// extending never shortens a running subscription; a lapsed or cancelled
/// membership restarts from today and returns to Active.
pub struct ExtendMembershipHandler {
    repository: Arc<dyn MemberRepository>,
}

impl ExtendMembershipHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ExtendMembershipCommand,
    ) -> Result<ExtendMembershipResult, MembershipError> {
        // 1. Find the member
        let mut member = self
            .repository
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(cmd.member_id))?;

        // 2. Resolve the extension plan
        let resolution = MembershipPlan::resolve(&cmd.extension_type);
        if resolution.fallback_applied {
            tracing::warn!(
                input = %cmd.extension_type,
                member_id = %cmd.member_id,
                "unknown extension plan, applying six-month default"
            );
        }

        // 3. Apply the extension (domain logic)
        let today = Timestamp::start_of_today();
        member.extend(resolution.plan, today)?;

        // 4. Record the paired transaction at the extension fee
        let transaction = Transaction::record(
            TransactionId::new(),
            member.id,
            LifecycleAction::Extend,
            resolution.plan.extension_fee(),
            format!("Extended: {}", resolution.plan.label()),
            Timestamp::now(),
        );

        // 5. Persist both atomically
        self.repository.update(&member, &transaction).await?;

        Ok(ExtendMembershipResult {
            member,
            transaction,
        })
    }
}
