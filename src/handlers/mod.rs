use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

pub mod analysis;
pub mod limits;
pub mod receipts;
pub mod transactions;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/:id",
            put(transactions::update).delete(transactions::delete),
        )
        .route("/api/summary", get(transactions::summary))
        .route("/api/limits", get(limits::get_limits).put(limits::put_limits))
        .route("/api/analysis", get(analysis::get_analysis))
        .route("/api/analysis/latest", get(analysis::latest))
        .route("/api/analysis/acknowledge", post(analysis::acknowledge))
        .route("/api/receipts/parse", post(receipts::parse))
        .route("/api/receipts/import", post(receipts::import))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
