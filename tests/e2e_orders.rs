// tests/e2e_orders.rs
mod support;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use support::{TestApp, assert_error_response, read_json};

fn checkout(user: Option<&str>, session: &str) -> Value {
    json!({
        "user_id": user,
        "items": [{
            "product_id": 4,
            "title": "Misty Ridge",
            "size": "8x10",
            "frame": "Walnut",
            "unit_price": 140.0,
            "quantity": 2
        }],
        "total_amount": 280.0,
        "currency": "USD",
        "payment_session_id": session
    })
}

#[tokio::test]
async fn order_is_recorded_with_defaults() {
    let app = TestApp::new();
    let order = app.create("/api/orders", checkout(Some("user_1"), "cs_1")).await;

    assert_eq!(order["status"], "created");
    assert_eq!(order["payment_status"], "pending");
    assert_eq!(order["currency"], "usd");
    assert_eq!(order["items"][0]["quantity"], 2);

    let id = order["id"].as_i64().unwrap();
    let fetched = read_json(app.admin(Method::GET, &format!("/api/orders/{id}"), None).await).await;
    assert_eq!(fetched["payment_session_id"], "cs_1");
}

#[tokio::test]
async fn order_without_items_is_rejected() {
    let app = TestApp::new();
    let mut body = checkout(None, "cs_1");
    body["items"] = json!([]);
    let resp = app.admin(Method::POST, "/api/orders", Some(body)).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "order must contain at least one item")
        .await;
}

#[tokio::test]
async fn listing_filters_by_customer() {
    let app = TestApp::new();
    app.create("/api/orders", checkout(Some("user_1"), "cs_1")).await;
    app.create("/api/orders", checkout(Some("user_2"), "cs_2")).await;
    app.create("/api/orders", checkout(Some("user_1"), "cs_3")).await;

    let all = read_json(app.admin(Method::GET, "/api/orders", None).await).await;
    let sessions: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["payment_session_id"].as_str().unwrap())
        .collect();
    assert_eq!(sessions, ["cs_3", "cs_2", "cs_1"]);

    let mine = read_json(app.admin(Method::GET, "/api/orders?user_id=user_1", None).await).await;
    assert_eq!(mine.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn status_update_rules() {
    let app = TestApp::new();
    let order = app.create("/api/orders", checkout(None, "cs_1")).await;
    let uri = format!("/api/orders/{}", order["id"].as_i64().unwrap());

    let resp = app.admin(Method::PUT, &uri, Some(json!({}))).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Request body cannot be empty").await;

    let resp = app
        .admin(Method::PUT, &uri, Some(json!({"status": "shipped"})))
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "unknown order status: shipped").await;

    let resp = app
        .admin(
            Method::PUT,
            &uri,
            Some(json!({"status": "paid", "payment_status": "paid"})),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["status"], "paid");
    assert_eq!(updated["payment_status"], "paid");

    let resp = app
        .admin(Method::PUT, "/api/orders/999", Some(json!({"status": "paid"})))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Order not found").await;
}
