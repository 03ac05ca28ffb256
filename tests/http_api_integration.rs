//! Integration tests for the HTTP API surface.
//!
//! These tests assemble the same router tree as the server binary, back
//! it with in-memory adapters, and drive it with real HTTP requests:
//! authentication headers, role gating, JSON bodies, and status codes.

use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use memberhub::adapters::http::{
    auth_router, membership_router, reports_router, AuthAppState, MembershipAppState,
    ReportsAppState,
};
use memberhub::domain::foundation::{Cents, DomainError, ErrorCode, MemberId, Timestamp, UserId};
use memberhub::domain::membership::{Member, Transaction};
use memberhub::domain::user::{Role, UserAccount};
use memberhub::ports::{
    LifecycleTotals, MemberRepository, MonthlyRevenue, ReportFigures, ReportReader,
    TransactionLog, UserDirectory,
};

use async_trait::async_trait;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory backing store shared by all port implementations.
struct InMemoryHub {
    members: Mutex<Vec<Member>>,
    transactions: Mutex<Vec<Transaction>>,
    accounts: Vec<UserAccount>,
}

impl InMemoryHub {
    fn new() -> Self {
        let admin_hash = UserAccount::hash_password("admin123").unwrap();
        Self {
            members: Mutex::new(Vec::new()),
            transactions: Mutex::new(Vec::new()),
            accounts: vec![UserAccount::new(
                UserId::new(),
                "admin".to_string(),
                admin_hash,
                Role::Admin,
            )],
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryHub {
    async fn create(&self, member: &Member, transaction: &Transaction) -> Result<(), DomainError> {
        self.members.lock().unwrap().push(member.clone());
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn update(&self, member: &Member, transaction: &Transaction) -> Result<(), DomainError> {
        let mut members = self.members.lock().unwrap();
        let pos = members
            .iter()
            .position(|m| m.id == member.id)
            .ok_or_else(|| DomainError::new(ErrorCode::MemberNotFound, "Member not found"))?;
        members[pos] = member.clone();
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.members.lock().unwrap().clone())
    }
}

#[async_trait]
impl TransactionLog for InMemoryHub {
    async fn list_recent_first(&self) -> Result<Vec<Transaction>, DomainError> {
        let mut transactions = self.transactions.lock().unwrap().clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    async fn list_for_member(&self, member_id: &MemberId) -> Result<Vec<Transaction>, DomainError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.member_id == member_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReportReader for InMemoryHub {
    async fn figures(&self, as_of: Timestamp) -> Result<ReportFigures, DomainError> {
        let members = self.members.lock().unwrap();
        let transactions = self.transactions.lock().unwrap();
        let window_end = as_of.add_days(30);

        Ok(ReportFigures {
            active_count: members.iter().filter(|m| m.is_active()).count() as u64,
            total_revenue: transactions
                .iter()
                .fold(Cents::zero(), |sum, t| sum + t.amount),
            expiring_soon_count: members
                .iter()
                .filter(|m| m.is_active() && m.end_date >= as_of && m.end_date <= window_end)
                .count() as u64,
            monthly_revenue: Vec::<MonthlyRevenue>::new(),
        })
    }

    async fn lifecycle_totals(&self) -> Result<LifecycleTotals, DomainError> {
        let members = self.members.lock().unwrap();
        let active = members.iter().filter(|m| m.is_active()).count() as u64;
        Ok(LifecycleTotals {
            total: members.len() as u64,
            active,
            cancelled: members.len() as u64 - active,
        })
    }
}

#[async_trait]
impl UserDirectory for InMemoryHub {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        Ok(self
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
}

/// Assembles the same router tree as the server binary.
fn test_app() -> Router {
    let hub = Arc::new(InMemoryHub::new());

    let membership_state = MembershipAppState {
        member_repository: hub.clone(),
        transaction_log: hub.clone(),
    };
    let reports_state = ReportsAppState {
        report_reader: hub.clone(),
    };
    let auth_state = AuthAppState {
        user_directory: hub,
    };

    let api = Router::new()
        .merge(membership_router().with_state(membership_state))
        .nest("/reports", reports_router().with_state(reports_state))
        .nest("/auth", auth_router().with_state(auth_state));

    Router::new().nest("/api", api)
}

const ADMIN_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
const USER_ID: &str = "550e8400-e29b-41d4-a716-446655440001";

fn request(method: &str, uri: &str, role: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        let id = if role == "admin" { ADMIN_ID } else { USER_ID };
        builder = builder.header("X-User-Id", id).header("X-User-Role", role);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn provision_body(guest_id: &str, membership_type: &str) -> Value {
    json!({
        "guest_id": guest_id,
        "name": "Alice",
        "email": "a@x.com",
        "membership_type": membership_type,
    })
}

// =============================================================================
// Authentication & Authorization
// =============================================================================

#[tokio::test]
async fn requests_without_principal_are_unauthorized() {
    let app = test_app();

    let response = send(&app, request("GET", "/api/members", None, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, request("GET", "/api/reports", None, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn member_mutations_require_admin_role() {
    let app = test_app();

    let response = send(
        &app,
        request(
            "POST",
            "/api/members",
            Some("user"),
            Some(provision_body("G1", "1 year")),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn login_verifies_credentials() {
    let app = test_app();

    let response = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "admin", "password": "admin123"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "admin");

    let response = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "admin", "password": "wrong"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Lifecycle over HTTP
// =============================================================================

#[tokio::test]
async fn provision_extend_cancel_roundtrip() {
    let app = test_app();

    // Provision
    let response = send(
        &app,
        request(
            "POST",
            "/api/members",
            Some("admin"),
            Some(provision_body("G1", "1 year")),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["member"]["membership_type"], "1 year");
    assert_eq!(body["member"]["fee_cents"], 9000);
    assert_eq!(body["member"]["status"], "active");
    assert_eq!(body["transaction"]["action"], "New");
    assert_eq!(body["transaction"]["amount_cents"], 9000);
    let member_id = body["member"]["id"].as_str().unwrap().to_string();

    // Extend
    let response = send(
        &app,
        request(
            "POST",
            &format!("/api/members/{}/extend", member_id),
            Some("admin"),
            Some(json!({"extension_type": "6 months"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["transaction"]["action"], "Extend");
    assert_eq!(body["transaction"]["amount_cents"], 4000);

    // Cancel
    let response = send(
        &app,
        request(
            "POST",
            &format!("/api/members/{}/cancel", member_id),
            Some("admin"),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["member"]["status"], "cancelled");
    assert_eq!(body["transaction"]["amount_cents"], 0);

    // Ledger visible to a regular user, most recent first
    let response = send(&app, request("GET", "/api/transactions", Some("user"), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[0]["action"], "Cancel");

    // Member history for the admin
    let response = send(
        &app,
        request(
            "GET",
            &format!("/api/members/{}/transactions", member_id),
            Some("admin"),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["transactions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn extend_unknown_member_returns_404() {
    let app = test_app();

    let response = send(
        &app,
        request(
            "POST",
            "/api/members/550e8400-e29b-41d4-a716-446655449999/extend",
            Some("admin"),
            Some(json!({"extension_type": "1 year"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "MEMBER_NOT_FOUND");
}

#[tokio::test]
async fn provision_with_blank_name_returns_400() {
    let app = test_app();

    let response = send(
        &app,
        request(
            "POST",
            "/api/members",
            Some("admin"),
            Some(json!({
                "guest_id": "G1",
                "name": "  ",
                "email": "a@x.com",
                "membership_type": "1 year",
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Reports over HTTP
// =============================================================================

#[tokio::test]
async fn reports_reflect_lifecycle_activity() {
    let app = test_app();

    for (guest, plan) in [("G1", "6 months"), ("G2", "1 year")] {
        let response = send(
            &app,
            request(
                "POST",
                "/api/members",
                Some("admin"),
                Some(provision_body(guest, plan)),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, request("GET", "/api/reports", Some("user"), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["active_count"], 2);
    assert_eq!(body["total_revenue_cents"], 14_000);

    let response = send(
        &app,
        request("GET", "/api/reports/lifecycle", Some("user"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["active"], 2);
    assert_eq!(body["cancelled"], 0);
}
