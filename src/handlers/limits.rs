use std::collections::HashMap;

use axum::extract::State;
use axum::Json;

use crate::db::queries;
use crate::error::{AppError, AppResult};
use crate::models::Category;
use crate::state::AppState;

/// All nine categories with defaults applied for the ones never saved.
pub async fn get_limits(State(state): State<AppState>) -> AppResult<Json<HashMap<Category, f64>>> {
    let conn = state.db.get()?;
    let limits = queries::limits::load_limits(&conn)?;
    Ok(Json(limits.resolved()))
}

pub async fn put_limits(
    State(state): State<AppState>,
    Json(limits): Json<HashMap<Category, f64>>,
) -> AppResult<Json<HashMap<Category, f64>>> {
    for (category, amount) in &limits {
        if *amount <= 0.0 || !amount.is_finite() {
            return Err(AppError::Validation(format!(
                "Limit for {} must be a positive number",
                category
            )));
        }
    }

    let conn = state.db.get()?;
    queries::limits::save_limits(&conn, &limits)?;

    state.cache.invalidate();
    state.schedule_analysis_refresh();

    let saved = queries::limits::load_limits(&conn)?;
    Ok(Json(saved.resolved()))
}
