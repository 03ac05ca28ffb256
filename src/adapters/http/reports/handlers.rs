//! HTTP handlers for report endpoints.
//!
//! Reports are read-only and available to any authenticated principal.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::reports::{
    GetLifecycleTotalsHandler, GetLifecycleTotalsQuery, GetReportFiguresHandler,
    GetReportFiguresQuery,
};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::ReportReader;

use super::super::error::ErrorResponse;
use super::super::principal::AuthenticatedUser;
use super::dto::{LifecycleTotalsResponse, ReportFiguresParams, ReportFiguresResponse};

/// Shared application state containing report dependencies.
#[derive(Clone)]
pub struct ReportsAppState {
    pub report_reader: Arc<dyn ReportReader>,
}

impl ReportsAppState {
    pub fn report_figures_handler(&self) -> GetReportFiguresHandler {
        GetReportFiguresHandler::new(self.report_reader.clone())
    }

    pub fn lifecycle_totals_handler(&self) -> GetLifecycleTotalsHandler {
        GetLifecycleTotalsHandler::new(self.report_reader.clone())
    }
}

/// GET /api/reports - Dashboard report figures
pub async fn get_report_figures(
    State(state): State<ReportsAppState>,
    _user: AuthenticatedUser,
    Query(params): Query<ReportFiguresParams>,
) -> Result<impl IntoResponse, ReportsApiError> {
    let as_of = params
        .as_of
        .map(Timestamp::from_datetime)
        .unwrap_or_else(Timestamp::start_of_today);

    let handler = state.report_figures_handler();
    let figures = handler.handle(GetReportFiguresQuery { as_of }).await?;

    Ok(Json(ReportFiguresResponse::from(figures)))
}

/// GET /api/reports/lifecycle - Member counts by lifecycle status
pub async fn get_lifecycle_totals(
    State(state): State<ReportsAppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, ReportsApiError> {
    let handler = state.lifecycle_totals_handler();
    let totals = handler.handle(GetLifecycleTotalsQuery::default()).await?;

    Ok(Json(LifecycleTotalsResponse::from(totals)))
}

/// API error type that converts domain errors to HTTP responses.
pub struct ReportsApiError(DomainError);

impl From<DomainError> for ReportsApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ReportsApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message.clone());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
