mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{build_test_router, setup_test_state};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_vendors_returns_seeded_map() {
    let (_dir, state) = setup_test_state();
    let app = build_test_router(state);

    let response = app.oneshot(get("/vendors")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["FluxEats"]["vendor_wallet"], "0xVendor1");
    assert_eq!(json["FluxEats"]["icon"], "🌌");
    assert_eq!(json["NebulaBites"]["vendor_wallet"], "0xVendor2");
}

#[tokio::test]
async fn test_vendors_missing_store_is_500() {
    let (dir, state) = setup_test_state();
    let app = build_test_router(state);

    std::fs::remove_file(dir.path().join("vendors.csv")).unwrap();

    let response = app.oneshot(get("/vendors")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_market_missing_store_is_empty_not_error() {
    let (dir, state) = setup_test_state();
    let app = build_test_router(state);

    std::fs::remove_file(dir.path().join("uploads.csv")).unwrap();

    let response = app.oneshot(get("/market")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_items_missing_store_is_empty_not_error() {
    let (dir, state) = setup_test_state();
    let app = build_test_router(state);

    std::fs::remove_file(dir.path().join("items.csv")).unwrap();

    let response = app.oneshot(get("/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let (_dir, state) = setup_test_state();
    let app = build_test_router(state);

    for uri in ["/vendors", "/items", "/market"] {
        let first = body_json(app.clone().oneshot(get(uri)).await.unwrap()).await;
        let second = body_json(app.clone().oneshot(get(uri)).await.unwrap()).await;
        assert_eq!(first, second, "{uri} should be stable across reads");
    }
}

#[tokio::test]
async fn test_end_to_end_order_fixture() {
    let (_dir, state) = setup_test_state();
    let app = build_test_router(state);

    let response = app
        .oneshot(post_json(
            "/order",
            json!({
                "wallet_address": "0x1111111111111111111111111111111111111111",
                "vendor_name": "FluxEats",
                "item": "Burger Combo",
                "delivery_address": "Kuwait City"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["reward"], 210_000);

    let order_id = json["order_id"].as_str().unwrap();
    let suffix = order_id.strip_prefix("FluxEats-").unwrap();
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_wallet_shapes_rejected_on_both_endpoints() {
    let (_dir, state) = setup_test_state();
    let app = build_test_router(state);

    let bad_wallets = [
        "0x111111111111111111111111111111111111111",   // 41
        "0x11111111111111111111111111111111111111111", // 43
        "1x1111111111111111111111111111111111111111",  // wrong prefix
    ];

    for wallet in bad_wallets {
        let order = app
            .clone()
            .oneshot(post_json(
                "/order",
                json!({
                    "wallet_address": wallet,
                    "vendor_name": "FluxEats",
                    "item": "Burger Combo",
                    "delivery_address": "Kuwait City"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(order.status(), StatusCode::BAD_REQUEST, "order: {wallet}");

        let upload = app
            .clone()
            .oneshot(post_json(
                "/upload",
                json!({
                    "wallet_address": wallet,
                    "order_id": "FluxEats-deadbeef",
                    "vendor": "FluxEats",
                    "item": "Burger Combo",
                    "price_kwd": 3.5
                }),
            ))
            .await
            .unwrap();
        assert_eq!(upload.status(), StatusCode::BAD_REQUEST, "upload: {wallet}");
    }
}

#[tokio::test]
async fn test_upload_then_market_round_trip() {
    let (_dir, state) = setup_test_state();
    let app = build_test_router(state);

    let upload = app
        .clone()
        .oneshot(post_json(
            "/upload",
            json!({
                "wallet_address": "0x2222222222222222222222222222222222222222",
                "order_id": "FluxEats-deadbeef",
                "vendor": "Healthy Bowls Co",
                "item": "Quinoa Bowl",
                "price_kwd": 4.25
            }),
        ))
        .await
        .unwrap();
    assert_eq!(upload.status(), StatusCode::OK);

    let json = body_json(upload).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["reward"], 100_000);

    let market = app.oneshot(get("/market")).await.unwrap();
    assert_eq!(market.status(), StatusCode::OK);

    let feed = body_json(market).await;
    let records = feed.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["order_id"], "FluxEats-deadbeef");
    assert_eq!(records[0]["category"], "Healthy");
    assert_eq!(records[0]["icon"], "🥗");
    assert_eq!(records[0]["price_kwd"], 4.25);
    assert_eq!(
        records[0]["user_wallet"],
        "0x2222222222222222222222222222222222222222"
    );
}

#[tokio::test]
async fn test_market_preserves_submission_order() {
    let (_dir, state) = setup_test_state();
    let app = build_test_router(state);

    for vendor in ["Burger Barn", "Generic Diner", "The Salad Spot"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/upload",
                json!({
                    "wallet_address": "0x2222222222222222222222222222222222222222",
                    "order_id": format!("{vendor}-cafef00d"),
                    "vendor": vendor,
                    "item": "Special",
                    "price_kwd": 1.5
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let feed = body_json(app.oneshot(get("/market")).await.unwrap()).await;
    let categories: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Fast Food", "Other", "Healthy"]);
}

#[tokio::test]
async fn test_order_write_failure_is_500() {
    let (dir, state) = setup_test_state();
    let app = build_test_router(state);

    // Removing the orders file makes the append-mode open fail
    std::fs::remove_file(dir.path().join("orders.csv")).unwrap();
    std::fs::create_dir(dir.path().join("orders.csv")).unwrap();

    let response = app
        .oneshot(post_json(
            "/order",
            json!({
                "wallet_address": "0x1111111111111111111111111111111111111111",
                "vendor_name": "FluxEats",
                "item": "Burger Combo",
                "delivery_address": "Kuwait City"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
