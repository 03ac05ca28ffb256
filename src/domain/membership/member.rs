//! Member aggregate entity.
//!
//! The Member aggregate represents a guest's subscription. Every mutation
//! of a Member is paired with exactly one ledger [`Transaction`] persisted
//! in the same unit of work; the aggregate computes the mutation, the
//! repository port guarantees the pairing.
//!
//! # Invariants
//!
//! - `end_date` always derives from the start/extension-base date plus the
//!   plan's day offset
//! - `fee` is the amount charged at creation only; later transactions
//!   carry their own amounts
//! - Members are never physically deleted

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Cents, DomainError, ErrorCode, MemberId, Timestamp};

use super::{MemberStatus, MembershipPlan};

/// Member aggregate - a guest's subscription record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for this member.
    pub id: MemberId,

    /// External guest identifier. Not guaranteed unique.
    pub guest_id: String,

    /// Member display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Plan selected at provisioning time.
    pub plan: MembershipPlan,

    /// Fee charged at creation. Never updated afterwards.
    pub fee: Cents,

    /// When the subscription started.
    pub start_date: Timestamp,

    /// When the subscription expires.
    pub end_date: Timestamp,

    /// Current lifecycle status.
    pub status: MemberStatus,
}

impl Member {
    /// Provisions a new Active member on the given plan.
    ///
    /// The fee comes from the provisioning fee table and the end date is
    /// `now` plus the plan duration.
    pub fn provision(
        id: MemberId,
        guest_id: String,
        name: String,
        email: String,
        plan: MembershipPlan,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            guest_id,
            name,
            email,
            plan,
            fee: plan.provision_fee(),
            start_date: now,
            end_date: now.add_days(plan.duration_days()),
            status: MemberStatus::Active,
        }
    }

    /// Extends the subscription by the given plan's duration.
    ///
    /// The extension base is the later of the current end date and `today`,
    /// so an extension never shortens a running subscription and a lapsed
    /// one restarts from today. Status is forced back to Active, which
    /// also reactivates a cancelled member.
    ///
    /// # Errors
    ///
    /// Returns error if the status transition is not allowed.
    pub fn extend(&mut self, plan: MembershipPlan, today: Timestamp) -> Result<(), DomainError> {
        self.transition_to(MemberStatus::Active)?;
        let base_date = self.end_date.max(today);
        self.end_date = base_date.add_days(plan.duration_days());
        Ok(())
    }

    /// Cancels the subscription. Dates are left unchanged.
    ///
    /// Cancelling an already-cancelled member is allowed; the caller still
    /// records a zero-amount transaction for the audit trail.
    ///
    /// # Errors
    ///
    /// Returns error if the status transition is not allowed.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.transition_to(MemberStatus::Cancelled)
    }

    /// Whether the member counts toward active reporting figures.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether the end date has passed while the member is still Active.
    pub fn is_lapsed(&self, today: Timestamp) -> bool {
        self.status.is_active() && self.end_date.is_before(&today)
    }

    fn transition_to(&mut self, target: MemberStatus) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition member from {:?} to {:?}", self.status, target),
            )
        })?;
        Ok(())
    }
}
