//! Integration tests for transaction CRUD, the monthly summary and
//! receipt import.

mod common;

use axum::http::StatusCode;
use common::TestClient;
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_transactions() {
    let client = TestClient::new();
    client
        .create_transaction("expense", "กาแฟ", 45.0, "2025-10-05")
        .await;
    client
        .create_transaction("income", "เงินเดือน", 30000.0, "2025-10-01")
        .await;

    let (status, body) = client.get_json("/api/transactions").await;
    assert_eq!(status, StatusCode::OK);

    let txs = body.as_array().unwrap();
    assert_eq!(txs.len(), 2);
    // Newest date first.
    assert_eq!(txs[0]["description"], "กาแฟ");
    assert_eq!(txs[1]["tx_type"], "income");
}

#[tokio::test]
async fn test_month_filter() {
    let client = TestClient::new();
    client
        .create_transaction("expense", "กาแฟ", 45.0, "2025-10-05")
        .await;
    client
        .create_transaction("expense", "ข้าว", 60.0, "2025-09-28")
        .await;

    let (_, body) = client.get_json("/api/transactions?month=2025-10").await;
    let txs = body.as_array().unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0]["description"], "กาแฟ");

    let (status, _) = client.get_json("/api/transactions?month=not-a-month").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads() {
    let client = TestClient::new();

    let (status, _) = client
        .post_json(
            "/api/transactions",
            json!({
                "tx_type": "expense",
                "description": "   ",
                "amount": 45.0,
                "date": "2025-10-05",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = client
        .post_json(
            "/api/transactions",
            json!({
                "tx_type": "expense",
                "description": "กาแฟ",
                "amount": -1.0,
                "date": "2025-10-05",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = client
        .post_json(
            "/api/transactions",
            json!({
                "tx_type": "expense",
                "description": "กาแฟ",
                "amount": 45.0,
                "date": "05/10/2568",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_transaction() {
    let client = TestClient::new();
    let id = client
        .create_transaction("expense", "กาแฟ", 45.0, "2025-10-05")
        .await;

    let (status, body) = client
        .put_json(
            &format!("/api/transactions/{}", id),
            json!({
                "tx_type": "expense",
                "description": "กาแฟเย็น",
                "amount": 55.0,
                "category": "food_drink",
                "date": "2025-10-05",
                "note": "แก้ราคา",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "กาแฟเย็น");
    assert_eq!(body["amount"], 55.0);
    assert_eq!(body["note"], "แก้ราคา");
}

#[tokio::test]
async fn test_update_missing_transaction_is_404() {
    let client = TestClient::new();
    let (status, _) = client
        .put_json(
            "/api/transactions/9999",
            json!({
                "tx_type": "expense",
                "description": "กาแฟ",
                "amount": 45.0,
                "date": "2025-10-05",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_transaction() {
    let client = TestClient::new();
    let id = client
        .create_transaction("expense", "กาแฟ", 45.0, "2025-10-05")
        .await;

    assert_eq!(
        client.delete(&format!("/api/transactions/{}", id)).await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        client.delete(&format!("/api/transactions/{}", id)).await,
        StatusCode::NOT_FOUND
    );

    let (_, body) = client.get_json("/api/transactions").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_percentages() {
    let client = TestClient::new();
    client
        .create_transaction("income", "เงินเดือน", 20000.0, "2025-10-01")
        .await;
    client
        .create_transaction("expense", "ค่าห้อง", 5000.0, "2025-10-02")
        .await;

    let (status, body) = client.get_json("/api/summary?month=2025-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["income"], 20000.0);
    assert_eq!(body["expense"], 5000.0);
    assert_eq!(body["balance"], 15000.0);
    assert_eq!(body["expense_percent"], 25);
    assert_eq!(body["income_percent"], 75);
}

#[tokio::test]
async fn test_summary_with_no_income_caps_at_100() {
    let client = TestClient::new();
    client
        .create_transaction("expense", "กาแฟ", 45.0, "2025-10-05")
        .await;

    let (_, body) = client.get_json("/api/summary?month=2025-10").await;
    assert_eq!(body["expense_percent"], 100);
    assert_eq!(body["income_percent"], 0);
}

#[tokio::test]
async fn test_receipt_parse_endpoint() {
    let client = TestClient::new();
    let text = "7-Eleven สาขาสุขุมวิท\n15/10/2568\nกาแฟเย็น 45.00\nข้าวกล่อง 59 บาท\nยอดรวม 104.00";

    let (status, body) = client
        .post_json("/api/receipts/parse", json!({ "text": text }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "7-Eleven สาขาสุขุมวิท");
    assert_eq!(body["date"], "2025-10-15");

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["description"], "กาแฟเย็น");
    assert_eq!(items[0]["amount"], 45.0);
    assert_eq!(items[0]["category"], "food_drink");
}

#[tokio::test]
async fn test_receipt_parse_rejects_empty_text() {
    let client = TestClient::new();
    let (status, _) = client
        .post_json("/api/receipts/parse", json!({ "text": "  " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_receipt_import_creates_expenses() {
    let client = TestClient::new();

    let (status, body) = client
        .post_json(
            "/api/receipts/import",
            json!({
                "date": "2025-10-15",
                "items": [
                    { "description": "กาแฟเย็น", "amount": 45.0, "category": "food_drink" },
                    { "description": "ยาแก้ปวด", "amount": 35.0, "category": "healthcare" },
                ],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let created = body.as_array().unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[0]["tx_type"], "expense");
    assert_eq!(created[0]["date"], "2025-10-15");
    assert_eq!(created[1]["category"], "healthcare");

    let (_, txs) = client.get_json("/api/transactions?month=2025-10").await;
    assert_eq!(txs.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_receipt_import_rejects_empty_items() {
    let client = TestClient::new();
    let (status, _) = client
        .post_json("/api/receipts/import", json!({ "items": [] }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
