//! Integration tests for the product endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p tradewithus-api)
//!
//! Run with: cargo test -p tradewithus-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use tradewithus_integration_tests::{TestContext, sample_product, sample_profile, unique};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_crud_round_trip() {
    let ctx = TestContext::new();
    let (token, _) = ctx.signup_and_login("Product Tester").await;
    let seller_id = unique("seller");
    let product_id = unique("mango");

    // Create the seller first (not enforced, but mirrors real usage)
    let resp = ctx
        .client
        .post(ctx.url("/profile"))
        .bearer_auth(&token)
        .json(&sample_profile(&seller_id))
        .send()
        .await
        .expect("seller create failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Create the product
    let resp = ctx
        .client
        .post(ctx.url("/product"))
        .bearer_auth(&token)
        .json(&sample_product(&product_id, &seller_id))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Read back: fields equal the input
    let resp = ctx
        .client
        .get(ctx.url(&format!("/product/{product_id}")))
        .send()
        .await
        .expect("get request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("get body");
    assert_eq!(body["data"]["productName"], "Kent Mango");
    assert_eq!(body["data"]["sellerId"], seller_id.as_str());
    assert_eq!(body["data"]["price"]["range"]["max"], 3.25);
    assert_eq!(body["data"]["shipping"]["hsCode"], "080450");

    // Update: full-document replace
    let mut updated = sample_product(&product_id, &seller_id);
    updated["productName"] = Value::from("Kent Mango Premium");
    let resp = ctx
        .client
        .put(ctx.url(&format!("/product/{product_id}")))
        .bearer_auth(&token)
        .json(&updated)
        .send()
        .await
        .expect("update request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("update body");
    assert_eq!(body["data"]["productName"], "Kent Mango Premium");

    // Seller listing includes it
    let resp = ctx
        .client
        .get(ctx.url(&format!("/product/seller/{seller_id}")))
        .send()
        .await
        .expect("seller listing failed");
    let body: Value = resp.json().await.expect("listing body");
    let listed = body["data"].as_array().expect("array");
    assert!(
        listed
            .iter()
            .any(|p| p["productId"] == product_id.as_str())
    );

    // Delete, then gone
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/product/{product_id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .get(ctx.url(&format!("/product/{product_id}")))
        .send()
        .await
        .expect("get request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_orphaned_product_still_resolves() {
    let ctx = TestContext::new();
    let (token, _) = ctx.signup_and_login("Orphan Tester").await;
    let seller_id = unique("vanishing");
    let product_id = unique("orphan");

    // Seller + product
    ctx.client
        .post(ctx.url("/profile"))
        .bearer_auth(&token)
        .json(&sample_profile(&seller_id))
        .send()
        .await
        .expect("seller create failed");
    ctx.client
        .post(ctx.url("/product"))
        .bearer_auth(&token)
        .json(&sample_product(&product_id, &seller_id))
        .send()
        .await
        .expect("product create failed");

    // Delete the seller; references are not enforced
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/profile/{seller_id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("seller delete failed");
    assert_eq!(resp.status(), StatusCode::OK);

    // The product still resolves, pointing at the deleted key
    let resp = ctx
        .client
        .get(ctx.url(&format!("/product/{product_id}")))
        .send()
        .await
        .expect("get request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("get body");
    assert_eq!(body["data"]["sellerId"], seller_id.as_str());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_price_category_message() {
    let ctx = TestContext::new();
    let (token, _) = ctx.signup_and_login("Price Tester").await;

    let mut payload = sample_product(&unique("badprice"), &unique("seller"));
    payload["price"]
        .as_object_mut()
        .expect("price object")
        .remove("current");

    let resp = ctx
        .client
        .post(ctx.url("/product"))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await
        .expect("create request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["message"], "Invalid price data");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_write_requires_token() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/product/{}", unique("ghost"))))
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
