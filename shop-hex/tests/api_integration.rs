//! End-to-end HTTP tests against the full router.
//!
//! These drive the axum router with an in-memory SQLite repository and
//! verify wire-level behavior: status codes, the `{code, message}`
//! error envelope, and the pagination envelope.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shop_hex::inbound::HttpServer;
use shop_repo::SqliteRepo;

async fn test_app() -> Router {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    HttpServer::new(repo).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a user and returns its id.
async fn create_user(app: &Router, user_name: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/users",
            json!({"full_name": "Test User", "user_name": user_name}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Credits a user's balance.
async fn fill_balance(app: &Router, user_id: i64, amount: i64) {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/payments",
            json!({"user_id": user_id, "amount": amount}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Creates a category and a product with the given stock; returns the
/// product id.
async fn create_product(app: &Router, name: &str, count: i64) -> i64 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/categories",
            json!({"name": "Beverages", "sort_order": 1, "description": "Drinks"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let category_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/products",
            json!({"name": name, "count": count, "category_id": category_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_user_crud_round_trip() {
    let app = test_app().await;

    let id = create_user(&app, "alice").await;

    let response = app.clone().oneshot(get(&format!("/api/users/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["user_name"], "alice");
    assert_eq!(user["role"], "USER");
    assert_eq!(user["balance"], 0);

    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/api/users/{id}"),
            json!({"full_name": "Alice Updated"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["full_name"], "Alice Updated");
    assert_eq!(updated["user_name"], "alice");

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/users/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get(&format!("/api/users/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["code"], 101);
    assert_eq!(error["message"], "User not found");
}

#[tokio::test]
async fn test_duplicate_user_name_envelope() {
    let app = test_app().await;

    create_user(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/users",
            json!({"full_name": "Alice Clone", "user_name": "alice"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["code"], 100);
    assert_eq!(error["message"], "User already exists");
}

#[tokio::test]
async fn test_invalid_path_id_is_validation_failure() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/users/not-a-number")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["code"], 400);
}

#[tokio::test]
async fn test_fill_balance_and_history() {
    let app = test_app().await;

    let alice = create_user(&app, "alice").await;
    fill_balance(&app, alice, 500).await;
    fill_balance(&app, alice, 250).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{alice}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["balance"], 750);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/payments/user/{alice}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let history = body_json(response).await;
    assert_eq!(history["total_items"], 2);
    assert_eq!(history["items"][0]["amount"], 500);
    assert_eq!(history["items"][1]["amount"], 250);
}

#[tokio::test]
async fn test_history_of_user_without_payments_is_empty_page() {
    let app = test_app().await;

    let alice = create_user(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/payments/user/{alice}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let history = body_json(response).await;
    assert_eq!(history["total_items"], 0);
    assert_eq!(history["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_product_requires_existing_category() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/products",
            json!({"name": "Espresso", "count": 10, "category_id": 42}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 102);
}

#[tokio::test]
async fn test_purchase_flow_debits_balance_and_stock() {
    let app = test_app().await;

    let alice = create_user(&app, "alice").await;
    fill_balance(&app, alice, 1000).await;
    let espresso = create_product(&app, "Espresso", 10).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/transactions",
            json!({
                "user_id": alice,
                "items": [{"product_id": espresso, "count": 3, "amount": 250}]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let transaction = body_json(response).await;
    assert_eq!(transaction["total_amount"], 750);
    let transaction_id = transaction["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{alice}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["balance"], 250);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/products/{espresso}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["count"], 7);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/transactions/{transaction_id}/products")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let records = body_json(response).await;
    assert_eq!(records["total_items"], 1);
    assert_eq!(records["items"][0]["user_name"], "alice");
    assert_eq!(records["items"][0]["product_name"], "Espresso");
    assert_eq!(records["items"][0]["total_amount"], 750);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/transactions/user/{alice}/products")))
        .await
        .unwrap();
    let records = body_json(response).await;
    assert_eq!(records["total_items"], 1);
}

#[tokio::test]
async fn test_purchase_with_insufficient_balance_is_rejected() {
    let app = test_app().await;

    let alice = create_user(&app, "alice").await;
    fill_balance(&app, alice, 500).await;
    let espresso = create_product(&app, "Espresso", 10).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/transactions",
            json!({
                "user_id": alice,
                "items": [{"product_id": espresso, "count": 3, "amount": 250}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["code"], 107);

    // Nothing was written or debited.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{alice}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["balance"], 500);

    let response = app.clone().oneshot(get("/api/transactions")).await.unwrap();
    assert_eq!(body_json(response).await["total_items"], 0);
}

#[tokio::test]
async fn test_purchase_with_insufficient_stock_is_rejected() {
    let app = test_app().await;

    let alice = create_user(&app, "alice").await;
    fill_balance(&app, alice, 10_000).await;
    let scarce = create_product(&app, "Scarce Tea", 2).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/transactions",
            json!({
                "user_id": alice,
                "items": [{"product_id": scarce, "count": 3, "amount": 100}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 108);
}

#[tokio::test]
async fn test_pagination_envelope() {
    let app = test_app().await;

    for i in 0..5 {
        create_user(&app, &format!("user{i}")).await;
    }

    let response = app
        .clone()
        .oneshot(get("/api/users?page=1&size=2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed["page"], 1);
    assert_eq!(listed["size"], 2);
    assert_eq!(listed["total_items"], 5);
    assert_eq!(listed["total_pages"], 3);
    assert_eq!(listed["items"].as_array().unwrap().len(), 2);
    assert_eq!(listed["items"][0]["user_name"], "user2");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert_eq!(doc["info"]["title"], "Shop Transaction Service API");
    assert!(doc["paths"]["/api/users"].is_object());
}
