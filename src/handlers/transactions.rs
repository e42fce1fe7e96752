use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::date_utils::Period;
use crate::db::queries;
use crate::error::{AppError, AppResult};
use crate::models::{NewTransaction, Transaction};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// "YYYY-MM"; absent means all transactions.
    pub month: Option<String>,
}

fn parse_month(month: Option<&str>) -> AppResult<Option<Period>> {
    month
        .map(|m| m.parse::<Period>().map_err(AppError::Validation))
        .transpose()
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<Transaction>>> {
    let period = parse_month(query.month.as_deref())?;
    let conn = state.db.get()?;
    Ok(Json(queries::transactions::list_transactions(
        &conn, period,
    )?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    new.validate().map_err(AppError::Validation)?;

    let conn = state.db.get()?;
    let id = queries::transactions::create_transaction(&conn, &new)?;
    let created = queries::transactions::get_transaction(&conn, id)?
        .ok_or_else(|| AppError::Internal("Created transaction not found".into()))?;

    state.cache.invalidate();
    state.schedule_analysis_refresh();
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(new): Json<NewTransaction>,
) -> AppResult<Json<Transaction>> {
    new.validate().map_err(AppError::Validation)?;

    let conn = state.db.get()?;
    if !queries::transactions::update_transaction(&conn, id, &new)? {
        return Err(AppError::NotFound(format!("Transaction {} not found", id)));
    }
    let updated = queries::transactions::get_transaction(&conn, id)?
        .ok_or_else(|| AppError::Internal("Updated transaction not found".into()))?;

    state.cache.invalidate();
    state.schedule_analysis_refresh();
    Ok(Json(updated))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    let conn = state.db.get()?;
    if !queries::transactions::delete_transaction(&conn, id)? {
        return Err(AppError::NotFound(format!("Transaction {} not found", id)));
    }

    state.cache.invalidate();
    state.schedule_analysis_refresh();
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    /// Share of income spent, rounded and capped at 100.
    pub expense_percent: i64,
    pub income_percent: i64,
}

pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Summary>> {
    let period = parse_month(query.month.as_deref())?;
    let conn = state.db.get()?;
    let (income, expense) = queries::transactions::sum_by_type(&conn, period)?;

    // With no income the gauge treats the base as 1 so expenses still
    // register as fully spent instead of dividing by zero.
    let base = if income > 0.0 { income } else { 1.0 };
    let expense_percent = ((100.0 * expense / base).round() as i64).min(100);

    Ok(Json(Summary {
        income,
        expense,
        balance: income - expense,
        expense_percent,
        income_percent: 100 - expense_percent,
    }))
}
