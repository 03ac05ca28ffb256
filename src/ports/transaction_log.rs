//! Transaction log port (read side).
//!
//! The ledger is append-only: entries are written through
//! [`MemberRepository`](super::MemberRepository) units of work and only
//! ever read back here.

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::membership::Transaction;
use async_trait::async_trait;

/// Reader port for the immutable transaction ledger.
#[async_trait]
pub trait TransactionLog: Send + Sync {
    /// List all transactions, most recent first.
    async fn list_recent_first(&self) -> Result<Vec<Transaction>, DomainError>;

    /// List a single member's transactions, most recent first.
    ///
    /// This reconstructs the member's full financial history.
    async fn list_for_member(&self, member_id: &MemberId)
        -> Result<Vec<Transaction>, DomainError>;
}
