//! End-to-end API flow over an in-memory database
//!
//! Drives the real router with `tower::ServiceExt::oneshot`: record
//! payments, close the shift, read back history and reports.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use pos_server::{ServerState, api};

async fn test_app() -> Router {
    let state = ServerState::for_testing().await.unwrap();
    api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn payment_body(method: &str, total: i64) -> Value {
    json!({
        "order_type": "takeaway",
        "order_id": "Đơn mang về 1",
        "orders": [{"name": "Mỳ Cay Bò", "price": 30000, "quantity": 3}],
        "total": total,
        "method": method,
    })
}

#[tokio::test]
async fn record_payment_then_close_shift_once() {
    let app = test_app().await;

    let (status, stored) = send(&app, "POST", "/api/payments", Some(payment_body("cash", 96000))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(stored["total"], 96000);
    assert_eq!(stored["method"], "cash");
    assert!(stored["time"].as_i64().unwrap() > 0);

    let (status, _) = send(&app, "POST", "/api/payments", Some(payment_body("chuyển khoản", 50000))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, history) = send(&app, "GET", "/api/payments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 2);

    // First close succeeds with the day's sums
    let (status, close) = send(&app, "POST", "/api/shifts/close", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(close["success"], true);
    assert_eq!(close["total"], 146000);
    assert_eq!(close["cash"], 96000);
    assert_eq!(close["bank"], 50000);

    // Second close is refused and creates no extra row
    let (status, error) = send(&app, "POST", "/api/shifts/close", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().contains("already closed"));

    let (status, shifts) = send(&app, "GET", "/api/shifts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shifts.as_array().unwrap().len(), 1);

    let (status, summary) = send(&app, "GET", "/api/shifts/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["byMonth"].as_array().unwrap().len(), 1);
    assert_eq!(summary["byMonth"][0]["total"], 146000);
    assert_eq!(summary["byQuarter"].as_array().unwrap().len(), 1);
    assert_eq!(summary["byYear"].as_array().unwrap().len(), 1);

    let (status, revenue) = send(&app, "GET", "/api/revenue", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = revenue.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["daily_revenue"], 146000);
    assert_eq!(rows[0]["transaction_count"], 2);
}

#[tokio::test]
async fn invalid_payments_are_rejected_with_an_error_body() {
    let app = test_app().await;

    let mut no_method = payment_body("cash", 96000);
    no_method.as_object_mut().unwrap().remove("method");
    let (status, body) = send(&app, "POST", "/api/payments", Some(no_method)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("method"));

    let unknown = payment_body("momo", 96000);
    let (status, _) = send(&app, "POST", "/api/payments", Some(unknown)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let empty_orders = json!({
        "order_type": "table",
        "order_id": "Bàn 1",
        "orders": [],
        "total": 50000,
        "method": "cash",
    });
    let (status, _) = send(&app, "POST", "/api/payments", Some(empty_orders)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was persisted
    let (_, history) = send(&app, "GET", "/api/payments", None).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn legacy_payment_method_field_is_accepted() {
    let app = test_app().await;

    let body = json!({
        "order_type": "table",
        "order_id": "Bàn 5",
        "orders": [{"name": "Trà Sữa", "price": 25000, "quantity": 2, "size": "L"}],
        "total": 50000,
        "payment_method": "tiền mặt",
    });
    let (status, stored) = send(&app, "POST", "/api/payments", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(stored["method"], "cash");
}

#[tokio::test]
async fn catalog_crud_and_category_detach() {
    let app = test_app().await;

    let (status, cat) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Mỳ Cay"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let cat_id = cat["id"].as_i64().unwrap();

    let (status, product) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Mỳ Cay Bò", "price": 30000, "category": "Mỳ Cay"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = product["id"].as_i64().unwrap();

    // Tiered + flat at once violates the pricing-mode invariant
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Trà Sữa", "price": 20000, "priceL": 25000})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, listed) = send(&app, "GET", "/api/products?category=M%E1%BB%B3%20Cay", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Deleting the category detaches the product
    let (status, _) = send(&app, "DELETE", &format!("/api/categories/{cat_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, detached) = send(&app, "GET", &format!("/api/products/{product_id}"), None).await;
    assert_eq!(detached["category"], Value::Null);
}
