use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Deserialize;

use crate::date_utils::Period;
use crate::db::queries;
use crate::error::{AppError, AppResult};
use crate::models::{Category, Channel};
use crate::services::analysis::{run_analysis, AnalysisOutcome};
use crate::services::alerts;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    /// "YYYY-MM"; absent means the current month.
    pub month: Option<String>,
}

/// Run a fresh analysis for the requested month. The current month's
/// outcome also lands in the cache for `/api/analysis/latest`.
pub async fn get_analysis(
    State(state): State<AppState>,
    Query(query): Query<AnalysisQuery>,
) -> AppResult<Json<AnalysisOutcome>> {
    let today = Local::now().date_naive();
    let period = match query.month.as_deref() {
        Some(m) => m.parse::<Period>().map_err(AppError::Validation)?,
        None => Period::containing(today),
    };

    let conn = state.db.get()?;
    let outcome = run_analysis(&conn, &state.config, period, today)?;

    if period == Period::containing(today) {
        state.cache.set(outcome.clone());
    }
    Ok(Json(outcome))
}

/// The cached current-month outcome, without touching the database.
pub async fn latest(State(state): State<AppState>) -> AppResult<Json<AnalysisOutcome>> {
    state
        .cache
        .get_latest()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No analysis has been run yet".into()))
}

#[derive(Debug, Deserialize)]
pub struct AcknowledgeRequest {
    pub category: Category,
}

/// Mark an in-app alert as seen, suppressing it for the rest of the day.
pub async fn acknowledge(
    State(state): State<AppState>,
    Json(request): Json<AcknowledgeRequest>,
) -> AppResult<StatusCode> {
    let today = Local::now().date_naive();
    let conn = state.db.get()?;

    let current = queries::notifications::read_state(&conn, Channel::InApp, today)?;
    let next = alerts::acknowledge(request.category, &current, today);
    queries::notifications::write_state(&conn, Channel::InApp, &next)?;

    state.cache.invalidate();
    Ok(StatusCode::NO_CONTENT)
}
