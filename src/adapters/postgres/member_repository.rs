//! PostgreSQL implementation of MemberRepository.
//!
//! Every write runs inside one sqlx transaction pairing the member write
//! with its ledger insert: both commit or neither does.

use crate::domain::foundation::{Cents, DomainError, ErrorCode, MemberId, Timestamp};
use crate::domain::membership::{Member, MemberStatus, MembershipPlan, Transaction};
use crate::ports::MemberRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the MemberRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a member.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    guest_id: String,
    name: String,
    email: String,
    plan: String,
    fee_cents: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let plan = parse_plan(&row.plan)?;
        let status = parse_status(&row.status)?;

        Ok(Member {
            id: MemberId::from_uuid(row.id),
            guest_id: row.guest_id,
            name: row.name,
            email: row.email,
            plan,
            fee: Cents::new(row.fee_cents),
            start_date: Timestamp::from_datetime(row.start_date),
            end_date: Timestamp::from_datetime(row.end_date),
            status,
        })
    }
}

fn parse_plan(s: &str) -> Result<MembershipPlan, DomainError> {
    MembershipPlan::parse(s).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid plan value: {}", s),
        )
    })
}

fn parse_status(s: &str) -> Result<MemberStatus, DomainError> {
    match s {
        "active" => Ok(MemberStatus::Active),
        "cancelled" => Ok(MemberStatus::Cancelled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

fn status_to_string(status: &MemberStatus) -> &'static str {
    match status {
        MemberStatus::Active => "active",
        MemberStatus::Cancelled => "cancelled",
    }
}

/// Inserts the ledger entry inside the caller's unit of work.
async fn insert_transaction(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    transaction: &Transaction,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO transactions (id, member_id, action, amount_cents, details, date)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(transaction.id.as_uuid())
    .bind(transaction.member_id.as_uuid())
    .bind(transaction.action.label())
    .bind(transaction.amount.as_i64())
    .bind(&transaction.details)
    .bind(transaction.date.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to insert transaction: {}", e),
        )
    })?;

    Ok(())
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn create(
        &self,
        member: &Member,
        transaction: &Transaction,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin unit of work: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO members (
                id, guest_id, name, email, plan, fee_cents, start_date, end_date, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.guest_id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(member.plan.label())
        .bind(member.fee.as_i64())
        .bind(member.start_date.as_datetime())
        .bind(member.end_date.as_datetime())
        .bind(status_to_string(&member.status))
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert member: {}", e),
            )
        })?;

        insert_transaction(&mut tx, transaction).await?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit unit of work: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(
        &self,
        member: &Member,
        transaction: &Transaction,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin unit of work: {}", e),
            )
        })?;

        let result = sqlx::query(
            r#"
            UPDATE members SET
                guest_id = $2,
                name = $3,
                email = $4,
                plan = $5,
                fee_cents = $6,
                start_date = $7,
                end_date = $8,
                status = $9
            WHERE id = $1
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.guest_id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(member.plan.label())
        .bind(member.fee.as_i64())
        .bind(member.start_date.as_datetime())
        .bind(member.end_date.as_datetime())
        .bind(status_to_string(&member.status))
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update member: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            tx.rollback().await.ok();
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            ));
        }

        insert_transaction(&mut tx, transaction).await?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit unit of work: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, guest_id, name, email, plan, fee_cents, start_date, end_date, status
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find member: {}", e),
            )
        })?;

        row.map(Member::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, guest_id, name, email, plan, fee_cents, start_date, end_date, status
            FROM members
            ORDER BY start_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list members: {}", e),
            )
        })?;

        rows.into_iter().map(Member::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plan_works_for_all_labels() {
        assert_eq!(parse_plan("6 months").unwrap(), MembershipPlan::SixMonths);
        assert_eq!(parse_plan("1 year").unwrap(), MembershipPlan::OneYear);
        assert_eq!(parse_plan("2 years").unwrap(), MembershipPlan::TwoYears);
    }

    #[test]
    fn parse_plan_rejects_invalid_values() {
        assert!(parse_plan("invalid").is_err());
        assert!(parse_plan("").is_err());
    }

    #[test]
    fn parse_status_works_for_all_values() {
        assert_eq!(parse_status("active").unwrap(), MemberStatus::Active);
        assert_eq!(parse_status("cancelled").unwrap(), MemberStatus::Cancelled);
    }

    #[test]
    fn parse_status_rejects_invalid_values() {
        assert!(parse_status("expired").is_err());
        assert!(parse_status("").is_err());
    }

    #[test]
    fn status_roundtrips_through_strings() {
        for status in [MemberStatus::Active, MemberStatus::Cancelled] {
            let s = status_to_string(&status);
            assert_eq!(parse_status(s).unwrap(), status);
        }
    }

    #[test]
    fn member_row_converts_to_member() {
        let row = MemberRow {
            id: Uuid::new_v4(),
            guest_id: "G1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            plan: "1 year".to_string(),
            fee_cents: 9000,
            start_date: Utc::now(),
            end_date: Utc::now(),
            status: "active".to_string(),
        };

        let member = Member::try_from(row).unwrap();
        assert_eq!(member.plan, MembershipPlan::OneYear);
        assert_eq!(member.fee, Cents::new(9000));
        assert_eq!(member.status, MemberStatus::Active);
    }

    #[test]
    fn member_row_with_bad_plan_fails_conversion() {
        let row = MemberRow {
            id: Uuid::new_v4(),
            guest_id: "G1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            plan: "3 decades".to_string(),
            fee_cents: 9000,
            start_date: Utc::now(),
            end_date: Utc::now(),
            status: "active".to_string(),
        };

        assert!(Member::try_from(row).is_err());
    }
}
