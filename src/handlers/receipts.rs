use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Deserialize;

use crate::db::queries;
use crate::error::{AppError, AppResult};
use crate::models::{Category, NewTransaction, Transaction, TxType};
use crate::services::receipt::{self, ReceiptDraft};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// Turn OCR text into a draft the client can review before importing.
pub async fn parse(Json(request): Json<ParseRequest>) -> AppResult<Json<ReceiptDraft>> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Receipt text must not be empty".into()));
    }
    Ok(Json(receipt::parse_receipt(&request.text)))
}

#[derive(Debug, Deserialize)]
pub struct ImportItem {
    pub description: String,
    pub amount: f64,
    pub category: Option<Category>,
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    /// "YYYY-MM-DD"; absent means today.
    pub date: Option<String>,
    pub items: Vec<ImportItem>,
}

/// Persist reviewed receipt items as expense transactions.
pub async fn import(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> AppResult<(StatusCode, Json<Vec<Transaction>>)> {
    if request.items.is_empty() {
        return Err(AppError::Validation("No items to import".into()));
    }
    let date = match request.date {
        Some(date) => date,
        None => Local::now().date_naive().to_string(),
    };

    let conn = state.db.get()?;
    let mut created = Vec::with_capacity(request.items.len());
    for item in request.items {
        let new = NewTransaction {
            tx_type: TxType::Expense,
            description: item.description,
            amount: item.amount,
            category: item.category,
            date: date.clone(),
            note: None,
        };
        new.validate().map_err(AppError::Validation)?;

        let id = queries::transactions::create_transaction(&conn, &new)?;
        let tx = queries::transactions::get_transaction(&conn, id)?
            .ok_or_else(|| AppError::Internal("Imported transaction not found".into()))?;
        created.push(tx);
    }

    state.cache.invalidate();
    state.schedule_analysis_refresh();
    Ok((StatusCode::CREATED, Json(created)))
}
