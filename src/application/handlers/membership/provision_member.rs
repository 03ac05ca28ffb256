//! ProvisionMemberHandler - Command handler for provisioning new members.

use std::sync::Arc;

use crate::domain::foundation::{MemberId, Timestamp, TransactionId, ValidationError};
use crate::domain::membership::{
    LifecycleAction, Member, MembershipError, MembershipPlan, Transaction,
};
use crate::ports::MemberRepository;

/// Command to provision a new member.
///
/// `membership_type` is the raw plan input; unknown values fall back to
/// the six-month default policy rather than rejecting.
#[derive(Debug, Clone)]
pub struct ProvisionMemberCommand {
    pub guest_id: String,
    pub name: String,
    pub email: String,
    pub membership_type: String,
}

/// Result of successful provisioning: the new member and its paired
/// ledger transaction.
#[derive(Debug, Clone)]
pub struct ProvisionMemberResult {
    pub member: Member,
    pub transaction: Transaction,
}

/// Handler for provisioning new members.
pub struct ProvisionMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl ProvisionMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ProvisionMemberCommand,
    ) -> Result<ProvisionMemberResult, MembershipError> {
        // 1. Reject bad input before any store interaction
        validate(&cmd)?;

        // 2. Resolve the plan; unknown input takes the default policy
        let resolution = MembershipPlan::resolve(&cmd.membership_type);
        if resolution.fallback_applied {
            tracing::warn!(
                input = %cmd.membership_type,
                "unknown membership plan, applying six-month default"
            );
        }

        // 3. Build the member and its provisioning transaction
        let now = Timestamp::now();
        let member = Member::provision(
            MemberId::new(),
            cmd.guest_id,
            cmd.name,
            cmd.email,
            resolution.plan,
            now,
        );

        let transaction = Transaction::record(
            TransactionId::new(),
            member.id,
            LifecycleAction::New,
            member.fee,
            format!("Provisioned: {}", resolution.plan.label()),
            now,
        );

        // 4. Persist both atomically
        self.repository.create(&member, &transaction).await?;

        Ok(ProvisionMemberResult {
            member,
            transaction,
        })
    }
}

fn validate(cmd: &ProvisionMemberCommand) -> Result<(), MembershipError> {
    if cmd.guest_id.trim().is_empty() {
        return Err(ValidationError::empty_field("guest_id").into());
    }
    if cmd.name.trim().is_empty() {
        return Err(ValidationError::empty_field("name").into());
    }
    if cmd.email.trim().is_empty() {
        return Err(ValidationError::empty_field("email").into());
    }
    if !cmd.email.contains('@') {
        return Err(ValidationError::invalid_format("email", "missing @ symbol").into());
    }
    Ok(())
}
