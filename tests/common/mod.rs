//! Shared test utilities for integration tests.
//!
//! Provides a `TestClient` that makes HTTP requests against the full router
//! backed by an in-memory database. Methods are intentionally broad to
//! support various test scenarios across different test files.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use spendwatch::config::Config;
use spendwatch::db::{create_in_memory_pool, migrations};
use spendwatch::handlers;
use spendwatch::state::AppState;
use std::path::{Path, PathBuf};
use tower::ServiceExt;

pub struct TestClient {
    pub state: AppState,
}

impl TestClient {
    /// Fresh in-memory database, no email channel configured.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Fresh in-memory database with the email alert channel enabled.
    pub fn with_alert_email(recipient: &str) -> Self {
        let recipient = recipient.to_string();
        Self::with_config(move |config| config.alert_email = Some(recipient))
    }

    fn with_config(customize: impl FnOnce(&mut Config)) -> Self {
        let pool = create_in_memory_pool().expect("Failed to create in-memory pool");
        {
            let mut conn = pool.get().expect("Failed to get connection");
            migrations::run_migrations(&mut conn, Path::new("migrations"))
                .expect("Failed to run migrations");
        }

        let mut config = Config {
            host: "127.0.0.1".into(),
            port: 7070,
            database_path: PathBuf::from(":memory:"),
            migrations_path: PathBuf::from("migrations"),
            alert_email: None,
            // Long enough that background refreshes never fire mid-test;
            // the debouncer has its own unit tests.
            debounce_ms: 60_000,
        };
        customize(&mut config);

        Self {
            state: AppState::new(pool, config),
        }
    }

    pub fn router(&self) -> Router {
        handlers::routes().with_state(self.state.clone())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// GET an endpoint and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, parsed)
    }

    async fn send_json(&self, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, parsed)
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("POST", uri, &body).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("PUT", uri, &body).await
    }

    pub async fn delete(&self, uri: &str) -> StatusCode {
        let response = self
            .router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    /// Create a transaction via the API and return its id.
    pub async fn create_transaction(
        &self,
        tx_type: &str,
        description: &str,
        amount: f64,
        date: &str,
    ) -> i64 {
        let (status, body) = self
            .post_json(
                "/api/transactions",
                serde_json::json!({
                    "tx_type": tx_type,
                    "description": description,
                    "amount": amount,
                    "category": null,
                    "date": date,
                    "note": null,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["id"].as_i64().expect("created transaction has an id")
    }

    /// Create an expense dated today, so current-month analysis sees it.
    pub async fn create_expense_today(&self, description: &str, amount: f64) -> i64 {
        let today = chrono::Local::now().date_naive().to_string();
        self.create_transaction("expense", description, amount, &today)
            .await
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
