//! MemberHub server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the adapters, and
//! serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use memberhub::adapters::http::{
    auth_router, membership_router, reports_router, AuthAppState, MembershipAppState,
    ReportsAppState,
};
use memberhub::adapters::postgres::{
    seed_demo_accounts, PostgresMemberRepository, PostgresReportReader, PostgresTransactionLog,
    PostgresUserDirectory,
};
use memberhub::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::info!("migrations applied");
    }

    if config.database.seed_demo_accounts {
        seed_demo_accounts(&pool)
            .await
            .context("failed to seed demo accounts")?;
    }

    let membership_state = MembershipAppState {
        member_repository: Arc::new(PostgresMemberRepository::new(pool.clone())),
        transaction_log: Arc::new(PostgresTransactionLog::new(pool.clone())),
    };
    let reports_state = ReportsAppState {
        report_reader: Arc::new(PostgresReportReader::new(
            pool.clone(),
            config.reports.clone(),
        )),
    };
    let auth_state = AuthAppState {
        user_directory: Arc::new(PostgresUserDirectory::new(pool)),
    };

    let api = Router::new()
        .merge(membership_router().with_state(membership_state))
        .nest("/reports", reports_router().with_state(reports_state))
        .nest("/auth", auth_router().with_state(auth_state));

    let origins = config
        .server
        .cors_origins_list()
        .into_iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let cors = CorsLayer::new().allow_origin(origins);

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr().context("invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "memberhub listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
