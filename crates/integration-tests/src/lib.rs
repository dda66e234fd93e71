//! Integration tests for TradeWithUs.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p tradewithus-cli -- migrate
//!
//! # Start the API
//! cargo run -p tradewithus-api
//!
//! # Run integration tests
//! cargo test -p tradewithus-integration-tests -- --ignored
//! ```
//!
//! Every test is `#[ignore]`d so the suite is a no-op without a live server;
//! `API_BASE_URL` overrides the default `http://localhost:8000`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Shared context for driving the REST API.
pub struct TestContext {
    pub client: Client,
    pub api_url: String,
}

impl TestContext {
    /// Create a context pointed at the configured API.
    #[must_use]
    pub fn new() -> Self {
        let api_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self {
            client: Client::new(),
            api_url,
        }
    }

    /// Build a full URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Sign up a fresh account and log in, returning `(token, user)`.
    ///
    /// # Panics
    ///
    /// Panics if the API rejects the signup or login.
    pub async fn signup_and_login(&self, name: &str) -> (String, Value) {
        let email = format!("{}@integration.test", unique("user"));
        let password = "s3cret-pass";

        let resp = self
            .client
            .post(self.url("/auth/signup"))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("signup request failed");
        assert_eq!(resp.status(), 201, "signup should succeed");

        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed");
        assert_eq!(resp.status(), 200, "login should succeed");

        let body: Value = resp.json().await.expect("login body should be JSON");
        let token = body["token"]
            .as_str()
            .expect("login should return a token")
            .to_owned();
        (token, body["user"].clone())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A collision-free identifier for test entities.
#[must_use]
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// A valid profile document for write-endpoint tests.
#[must_use]
pub fn sample_profile(profile_id: &str) -> Value {
    json!({
        "profileId": profile_id,
        "businessName": "Acme Trading",
        "logo": "https://cdn.example.com/acme/logo.png",
        "businessOverview": "Fresh produce exporter serving three continents.",
        "businessType": "Exporter",
        "origin": "Kenya",
        "established": 2010,
        "address": "12 Harbour Rd, Mombasa",
        "owner": "J. Mwangi",
        "isPro": true,
        "verifications": { "businessEmail": true },
        "certifications": [
            { "name": "GlobalG.A.P.", "icon": "gap.png", "validFrom": "2023", "validTo": "2026" }
        ],
        "importExport": { "shipments": 42, "exportVolume": "500 tons" }
    })
}

/// A valid product document for write-endpoint tests.
#[must_use]
pub fn sample_product(product_id: &str, seller_id: &str) -> Value {
    json!({
        "productId": product_id,
        "productName": "Kent Mango",
        "images": ["https://cdn.example.com/m1.jpg"],
        "sellerId": seller_id,
        "price": { "current": 2.5, "range": { "min": 2.0, "max": 3.25 } },
        "details": {
            "name": "Kent Mango",
            "product": "Mango",
            "origin": "Kenya",
            "productionCapacity": "200 tons/month",
            "exportVolume": "80 tons/month",
            "formAndCut": "Whole",
            "color": "Red-green",
            "cultivationType": "Conventional"
        },
        "shipping": {
            "hsCode": "080450",
            "minQuantity": "1 ton",
            "packaging": "4kg cartons",
            "transportMode": "Sea / Air",
            "incoterms": "FOB",
            "shelfLife": "21 days"
        }
    })
}
