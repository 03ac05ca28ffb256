//! Ledger transaction entity.
//!
//! One Transaction is recorded for every member-mutating operation, in the
//! same unit of work as the member write. Transactions are immutable once
//! created and never deleted; a member's full financial history is the set
//! of transactions carrying its id.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Cents, MemberId, Timestamp, TransactionId};

use super::LifecycleAction;

/// An immutable ledger entry for one lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for this transaction.
    pub id: TransactionId,

    /// The member this transaction belongs to.
    pub member_id: MemberId,

    /// Which lifecycle event was recorded.
    pub action: LifecycleAction,

    /// Amount charged. Zero for cancellations.
    pub amount: Cents,

    /// Free-text annotation describing the event.
    pub details: String,

    /// When the transaction was recorded.
    pub date: Timestamp,
}

impl Transaction {
    /// Records a new ledger entry.
    pub fn record(
        id: TransactionId,
        member_id: MemberId,
        action: LifecycleAction,
        amount: Cents,
        details: String,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            member_id,
            action,
            amount,
            details,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_all_fields() {
        let member_id = MemberId::new();
        let now = Timestamp::now();
        let txn = Transaction::record(
            TransactionId::new(),
            member_id,
            LifecycleAction::New,
            Cents::new(9000),
            "Provisioned: 1 year".to_string(),
            now,
        );

        assert_eq!(txn.member_id, member_id);
        assert_eq!(txn.action, LifecycleAction::New);
        assert_eq!(txn.amount, Cents::new(9000));
        assert_eq!(txn.details, "Provisioned: 1 year");
        assert_eq!(txn.date, now);
    }

    #[test]
    fn cancellation_entries_may_carry_zero_amount() {
        let txn = Transaction::record(
            TransactionId::new(),
            MemberId::new(),
            LifecycleAction::Cancel,
            Cents::zero(),
            "Cancelled".to_string(),
            Timestamp::now(),
        );
        assert!(txn.amount.is_zero());
    }
}
