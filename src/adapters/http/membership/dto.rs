//! HTTP DTOs (Data Transfer Objects) for membership endpoints.
//!
//! These types define the JSON request/response structure for the
//! membership API. They serve as the boundary between HTTP and the
//! application layer.

use crate::domain::membership::{Member, MemberStatus, MembershipPlan, Transaction};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to provision a new member.
///
/// `membership_type` stays a free string here: unknown plans are resolved
/// by the default-plan policy rather than rejected at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisionMemberRequest {
    pub guest_id: String,
    pub name: String,
    pub email: String,
    pub membership_type: String,
}

/// Request to extend a membership.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendMembershipRequest {
    pub extension_type: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Member details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    /// Member ID.
    pub id: String,
    /// External guest identifier.
    pub guest_id: String,
    /// Member display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Plan selected at provisioning.
    pub membership_type: MembershipPlan,
    /// Fee charged at creation, in cents.
    pub fee_cents: i64,
    /// Subscription start (ISO 8601).
    pub start_date: String,
    /// Subscription expiry (ISO 8601).
    pub end_date: String,
    /// Current lifecycle status.
    pub status: MemberStatus,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.to_string(),
            guest_id: member.guest_id,
            name: member.name,
            email: member.email,
            membership_type: member.plan,
            fee_cents: member.fee.as_i64(),
            start_date: member.start_date.as_datetime().to_rfc3339(),
            end_date: member.end_date.as_datetime().to_rfc3339(),
            status: member.status,
        }
    }
}

/// Ledger transaction for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: String,
    /// Owning member ID.
    pub member_id: String,
    /// Lifecycle action label.
    pub action: String,
    /// Amount in cents.
    pub amount_cents: i64,
    /// Free-text annotation.
    pub details: String,
    /// When the transaction was recorded (ISO 8601).
    pub date: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(txn: Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            member_id: txn.member_id.to_string(),
            action: txn.action.label().to_string(),
            amount_cents: txn.amount.as_i64(),
            details: txn.details,
            date: txn.date.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for a lifecycle operation: the member and its paired
/// transaction.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleResponse {
    pub member: MemberResponse,
    pub transaction: TransactionResponse,
}

/// Response for the member roster.
#[derive(Debug, Clone, Serialize)]
pub struct MembersResponse {
    pub members: Vec<MemberResponse>,
}

/// Response for ledger listings.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
}
