//! Member repository port (write side).
//!
//! Defines the contract for persisting Member aggregates together with
//! their paired ledger transactions.
//!
//! # Design
//!
//! - **Unit of work**: `create` and `update` each persist a member write
//!   AND its transaction in one atomic unit. Either both commit or neither
//!   does; implementations must roll back on any failure so no partial
//!   state is ever observable.
//! - **No deletion**: members transition to Cancelled, never disappear.
//!
//! # Example
//!
//! ```ignore
//! async fn cancel(
//!     repo: &dyn MemberRepository,
//!     id: &MemberId,
//! ) -> Result<(), MembershipError> {
//!     let mut member = repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| MembershipError::not_found(*id))?;
//!     member.cancel()?;
//!     let txn = Transaction::record(
//!         TransactionId::new(),
//!         member.id,
//!         LifecycleAction::Cancel,
//!         Cents::zero(),
//!         "Cancelled".to_string(),
//!         Timestamp::now(),
//!     );
//!     repo.update(&member, &txn).await?;
//!     Ok(())
//! }
//! ```

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::membership::{Member, Transaction};
use async_trait::async_trait;

/// Repository port for Member persistence.
///
/// Every write pairs the member mutation with exactly one transaction
/// insert inside a single atomic unit of work.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persist a new member and its provisioning transaction atomically.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the unit of work fails to commit; the
    ///   implementation rolls back and neither record is persisted
    async fn create(&self, member: &Member, transaction: &Transaction)
        -> Result<(), DomainError>;

    /// Persist a member mutation and its transaction atomically.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member does not exist
    /// - `DatabaseError` if the unit of work fails to commit
    async fn update(&self, member: &Member, transaction: &Transaction)
        -> Result<(), DomainError>;

    /// Find a member by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;

    /// List all members, most recently started first.
    async fn list_all(&self) -> Result<Vec<Member>, DomainError>;
}
