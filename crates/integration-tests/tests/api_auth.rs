//! Integration tests for the auth endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p tradewithus-api)
//!
//! Run with: cargo test -p tradewithus-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use tradewithus_integration_tests::{TestContext, unique};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_me_echoes_login_claims() {
    let ctx = TestContext::new();
    let (token, user) = ctx.signup_and_login("Claims Tester").await;

    let resp = ctx
        .client
        .get(ctx.url("/auth/me"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("me request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    // The token payload decodes to the same {id, name, email} login returned
    let body: Value = resp.json().await.expect("me body");
    assert_eq!(body["user"]["id"], user["id"]);
    assert_eq!(body["user"]["name"], user["name"]);
    assert_eq!(body["user"]["email"], user["email"]);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_bad_logins_are_indistinguishable() {
    let ctx = TestContext::new();

    let email = format!("{}@integration.test", unique("victim"));
    let resp = ctx
        .client
        .post(ctx.url("/auth/signup"))
        .json(&json!({ "name": "Victim", "email": email, "password": "s3cret-pass" }))
        .send()
        .await
        .expect("signup failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Wrong password
    let resp = ctx
        .client
        .post(ctx.url("/auth/login"))
        .json(&json!({ "email": email, "password": "wrong-pass" }))
        .send()
        .await
        .expect("login failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = resp.json().await.expect("body");

    // Unknown email
    let resp = ctx
        .client
        .post(ctx.url("/auth/login"))
        .json(&json!({
            "email": format!("{}@integration.test", unique("nobody")),
            "password": "wrong-pass"
        }))
        .send()
        .await
        .expect("login failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: Value = resp.json().await.expect("body");

    // Same status, same message: the caller cannot tell which check failed
    assert_eq!(wrong_password["message"], unknown_email["message"]);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_duplicate_signup_is_rejected() {
    let ctx = TestContext::new();
    let email = format!("{}@integration.test", unique("taken"));
    let payload = json!({ "name": "First", "email": email, "password": "s3cret-pass" });

    let resp = ctx
        .client
        .post(ctx.url("/auth/signup"))
        .json(&payload)
        .send()
        .await
        .expect("signup failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ctx
        .client
        .post(ctx.url("/auth/signup"))
        .json(&payload)
        .send()
        .await
        .expect("signup failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["message"], "User already exists with this email");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cross_account_delete_is_forbidden() {
    let ctx = TestContext::new();
    let (attacker_token, _) = ctx.signup_and_login("Attacker").await;
    let (victim_token, victim) = ctx.signup_and_login("Victim").await;
    let victim_id = victim["id"].as_str().expect("victim id");

    // Attacker cannot delete the victim's account
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/auth/user/{victim_id}")))
        .bearer_auth(&attacker_token)
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["success"], false);

    // The victim's token still works: the account is intact
    let resp = ctx
        .client
        .get(ctx.url("/auth/me"))
        .bearer_auth(&victim_token)
        .send()
        .await
        .expect("me request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    // Self-service delete succeeds
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/auth/user/{victim_id}")))
        .bearer_auth(&victim_token)
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["success"], true);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_me_rejects_garbage_token() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(ctx.url("/auth/me"))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .expect("me request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["message"], "Token is not valid");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_me_requires_token() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(ctx.url("/auth/me"))
        .send()
        .await
        .expect("me request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("body");
    assert_eq!(body["message"], "No token, authorization denied");
}
