//! Axum router configuration for membership endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cancel_membership, extend_membership, get_member_history, list_members, list_transactions,
    provision_member, MembershipAppState,
};

/// Create the member management router.
///
/// # Routes (admin role required)
///
/// - `GET /` - List all members
/// - `POST /` - Provision a new member
/// - `POST /:id/extend` - Extend a membership
/// - `POST /:id/cancel` - Cancel a membership
/// - `GET /:id/transactions` - One member's financial history
pub fn member_routes() -> Router<MembershipAppState> {
    Router::new()
        .route("/", get(list_members).post(provision_member))
        .route("/:id/extend", post(extend_membership))
        .route("/:id/cancel", post(cancel_membership))
        .route("/:id/transactions", get(get_member_history))
}

/// Create the transaction ledger router.
///
/// # Routes (any authenticated principal)
///
/// - `GET /` - All transactions, most recent first
pub fn transaction_routes() -> Router<MembershipAppState> {
    Router::new().route("/", get(list_transactions))
}

/// Create the complete membership module router.
///
/// Mounts the member management and ledger routers, suitable for nesting
/// under `/api`.
pub fn membership_router() -> Router<MembershipAppState> {
    Router::new()
        .nest("/members", member_routes())
        .nest("/transactions", transaction_routes())
}
