//! PostgreSQL implementation of TransactionLog.

use crate::domain::foundation::{Cents, DomainError, ErrorCode, MemberId, Timestamp, TransactionId};
use crate::domain::membership::{LifecycleAction, Transaction};
use crate::ports::TransactionLog;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the TransactionLog port.
pub struct PostgresTransactionLog {
    pool: PgPool,
}

impl PostgresTransactionLog {
    /// Creates a new PostgresTransactionLog with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a ledger transaction.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    member_id: Uuid,
    action: String,
    amount_cents: i64,
    details: String,
    date: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = DomainError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let action = LifecycleAction::parse(&row.action).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid action value: {}", row.action),
            )
        })?;

        Ok(Transaction {
            id: TransactionId::from_uuid(row.id),
            member_id: MemberId::from_uuid(row.member_id),
            action,
            amount: Cents::new(row.amount_cents),
            details: row.details,
            date: Timestamp::from_datetime(row.date),
        })
    }
}

#[async_trait]
impl TransactionLog for PostgresTransactionLog {
    async fn list_recent_first(&self) -> Result<Vec<Transaction>, DomainError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, member_id, action, amount_cents, details, date
            FROM transactions
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list transactions: {}", e),
            )
        })?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn list_for_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Vec<Transaction>, DomainError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, member_id, action, amount_cents, details, date
            FROM transactions
            WHERE member_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(member_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list member transactions: {}", e),
            )
        })?;

        rows.into_iter().map(Transaction::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_row_converts_to_transaction() {
        let row = TransactionRow {
            id: Uuid::new_v4(),
            member_id: Uuid::new_v4(),
            action: "New".to_string(),
            amount_cents: 9000,
            details: "Provisioned: 1 year".to_string(),
            date: Utc::now(),
        };

        let txn = Transaction::try_from(row).unwrap();
        assert_eq!(txn.action, LifecycleAction::New);
        assert_eq!(txn.amount, Cents::new(9000));
    }

    #[test]
    fn transaction_row_with_bad_action_fails_conversion() {
        let row = TransactionRow {
            id: Uuid::new_v4(),
            member_id: Uuid::new_v4(),
            action: "Refund".to_string(),
            amount_cents: 0,
            details: String::new(),
            date: Utc::now(),
        };

        assert!(Transaction::try_from(row).is_err());
    }
}
