//! HTTP handlers for membership endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. Mutating endpoints and the roster require the admin role;
//! the ledger listing is available to any authenticated principal.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::handlers::membership::{
    CancelMembershipCommand, CancelMembershipHandler, ExtendMembershipCommand,
    ExtendMembershipHandler, GetMemberHistoryHandler, GetMemberHistoryQuery, ListMembersHandler,
    ListMembersQuery, ListTransactionsHandler, ListTransactionsQuery, ProvisionMemberCommand,
    ProvisionMemberHandler,
};
use crate::domain::foundation::MemberId;
use crate::domain::membership::MembershipError;
use crate::ports::{MemberRepository, TransactionLog};

use super::super::error::ErrorResponse;
use super::super::principal::AuthenticatedUser;
use super::dto::{
    ExtendMembershipRequest, LifecycleResponse, MemberResponse, MembersResponse,
    ProvisionMemberRequest, TransactionResponse, TransactionsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing membership dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct MembershipAppState {
    pub member_repository: Arc<dyn MemberRepository>,
    pub transaction_log: Arc<dyn TransactionLog>,
}

impl MembershipAppState {
    /// Create handlers on demand from the shared state.
    pub fn provision_member_handler(&self) -> ProvisionMemberHandler {
        ProvisionMemberHandler::new(self.member_repository.clone())
    }

    pub fn extend_membership_handler(&self) -> ExtendMembershipHandler {
        ExtendMembershipHandler::new(self.member_repository.clone())
    }

    pub fn cancel_membership_handler(&self) -> CancelMembershipHandler {
        CancelMembershipHandler::new(self.member_repository.clone())
    }

    pub fn list_members_handler(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.member_repository.clone())
    }

    pub fn list_transactions_handler(&self) -> ListTransactionsHandler {
        ListTransactionsHandler::new(self.transaction_log.clone())
    }

    pub fn member_history_handler(&self) -> GetMemberHistoryHandler {
        GetMemberHistoryHandler::new(self.member_repository.clone(), self.transaction_log.clone())
    }
}

fn require_admin(user: &AuthenticatedUser) -> Result<(), MembershipApiError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(MembershipError::forbidden().into())
    }
}

fn parse_member_id(id: Uuid) -> MemberId {
    MemberId::from_uuid(id)
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/members - List all members (admin only)
pub async fn list_members(
    State(state): State<MembershipAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, MembershipApiError> {
    require_admin(&user)?;

    let handler = state.list_members_handler();
    let members = handler.handle(ListMembersQuery::default()).await?;

    let response = MembersResponse {
        members: members.into_iter().map(MemberResponse::from).collect(),
    };
    Ok(Json(response))
}

/// GET /api/transactions - List all transactions, most recent first
pub async fn list_transactions(
    State(state): State<MembershipAppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, MembershipApiError> {
    let handler = state.list_transactions_handler();
    let transactions = handler.handle(ListTransactionsQuery::default()).await?;

    let response = TransactionsResponse {
        transactions: transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    };
    Ok(Json(response))
}

/// GET /api/members/{id}/transactions - One member's history (admin only)
pub async fn get_member_history(
    State(state): State<MembershipAppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, MembershipApiError> {
    require_admin(&user)?;

    let handler = state.member_history_handler();
    let transactions = handler
        .handle(GetMemberHistoryQuery {
            member_id: parse_member_id(id),
        })
        .await?;

    let response = TransactionsResponse {
        transactions: transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    };
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/members - Provision a new member (admin only)
pub async fn provision_member(
    State(state): State<MembershipAppState>,
    user: AuthenticatedUser,
    Json(request): Json<ProvisionMemberRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    require_admin(&user)?;

    let handler = state.provision_member_handler();
    let cmd = ProvisionMemberCommand {
        guest_id: request.guest_id,
        name: request.name,
        email: request.email,
        membership_type: request.membership_type,
    };

    let result = handler.handle(cmd).await?;

    let response = LifecycleResponse {
        member: MemberResponse::from(result.member),
        transaction: TransactionResponse::from(result.transaction),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/members/{id}/extend - Extend a membership (admin only)
pub async fn extend_membership(
    State(state): State<MembershipAppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ExtendMembershipRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    require_admin(&user)?;

    let handler = state.extend_membership_handler();
    let cmd = ExtendMembershipCommand {
        member_id: parse_member_id(id),
        extension_type: request.extension_type,
    };

    let result = handler.handle(cmd).await?;

    let response = LifecycleResponse {
        member: MemberResponse::from(result.member),
        transaction: TransactionResponse::from(result.transaction),
    };
    Ok(Json(response))
}

/// POST /api/members/{id}/cancel - Cancel a membership (admin only)
pub async fn cancel_membership(
    State(state): State<MembershipAppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, MembershipApiError> {
    require_admin(&user)?;

    let handler = state.cancel_membership_handler();
    let cmd = CancelMembershipCommand {
        member_id: parse_member_id(id),
    };

    let result = handler.handle(cmd).await?;

    let response = LifecycleResponse {
        member: MemberResponse::from(result.member),
        transaction: TransactionResponse::from(result.transaction),
    };
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
pub struct MembershipApiError(MembershipError);

impl From<MembershipError> for MembershipApiError {
    fn from(err: MembershipError) -> Self {
        Self(err)
    }
}

impl IntoResponse for MembershipApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            MembershipError::NotFound(_) => (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND"),
            MembershipError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            MembershipError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            MembershipError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
