//! Member status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Member subscription status.
///
/// A member is either Active or Cancelled. An extension always moves a
/// member back to Active, including lapsed or cancelled members, and
/// cancelling an already-cancelled member is permitted (idempotent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Subscription is in force (the end date may still be in the past,
    /// see lapsed members).
    Active,

    /// Subscription was cancelled. Reactivated by any extension.
    Cancelled,
}

impl MemberStatus {
    /// Returns true if this status counts toward active reporting figures.
    pub fn is_active(&self) -> bool {
        matches!(self, MemberStatus::Active)
    }
}

impl StateMachine for MemberStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MemberStatus::*;
        matches!(
            (self, target),
            // Renewal keeps a member active; an extension reactivates
            // a cancelled member; cancel is idempotent.
            (Active, Active) | (Active, Cancelled) | (Cancelled, Active) | (Cancelled, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MemberStatus::*;
        match self {
            Active => vec![Active, Cancelled],
            Cancelled => vec![Active, Cancelled],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_can_renew_to_active() {
        let result = MemberStatus::Active.transition_to(MemberStatus::Active);
        assert_eq!(result, Ok(MemberStatus::Active));
    }

    #[test]
    fn active_can_cancel() {
        let result = MemberStatus::Active.transition_to(MemberStatus::Cancelled);
        assert_eq!(result, Ok(MemberStatus::Cancelled));
    }

    #[test]
    fn cancelled_can_reactivate_through_extension() {
        let result = MemberStatus::Cancelled.transition_to(MemberStatus::Active);
        assert_eq!(result, Ok(MemberStatus::Active));
    }

    #[test]
    fn cancel_is_idempotent() {
        let result = MemberStatus::Cancelled.transition_to(MemberStatus::Cancelled);
        assert_eq!(result, Ok(MemberStatus::Cancelled));
    }

    #[test]
    fn is_active_only_for_active() {
        assert!(MemberStatus::Active.is_active());
        assert!(!MemberStatus::Cancelled.is_active());
    }

    #[test]
    fn no_status_is_terminal() {
        assert!(!MemberStatus::Active.is_terminal());
        assert!(!MemberStatus::Cancelled.is_terminal());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MemberStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&MemberStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
