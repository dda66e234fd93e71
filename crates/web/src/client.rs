//! Typed client for the TradeWithUs REST API.
//!
//! Every page fetch goes through this client. It decodes the
//! `{success, data, message}` envelope, maps 404s to a typed `NotFound`,
//! and performs no caching or retries: a page render issues exactly the
//! requests it needs and degrades on failure.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use tradewithus_core::{ApiResponse, Product, ProductId, Profile, ProfileId, UserInfo};

/// Errors that can occur when talking to the API.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 404 for the addressed entity.
    #[error("not found")]
    NotFound,

    /// The API rejected the request with a message.
    #[error("api rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message from the response body.
        message: String,
    },

    /// The response body did not match the expected envelope.
    #[error("malformed api response: {0}")]
    MalformedResponse(String),
}

/// Successful login response from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserInfo,
}

/// Successful signup response from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupOutcome {
    pub user: UserInfo,
}

/// Error body shape of the auth endpoints (`{message}`).
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Client for the TradeWithUs REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    /// Fetch all company profiles.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError` if the request or envelope decoding fails.
    pub async fn fetch_profiles(&self) -> Result<Vec<Profile>, ApiClientError> {
        self.get_enveloped("profile/all").await
    }

    /// Fetch a single company profile by its business key.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::NotFound` if no such profile exists.
    pub async fn fetch_profile(&self, profile_id: &ProfileId) -> Result<Profile, ApiClientError> {
        self.get_enveloped(&format!("profile/{profile_id}")).await
    }

    /// Fetch all product listings.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError` if the request or envelope decoding fails.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiClientError> {
        self.get_enveloped("product/all").await
    }

    /// Fetch a single product by its business key.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::NotFound` if no such product exists.
    pub async fn fetch_product(&self, product_id: &ProductId) -> Result<Product, ApiClientError> {
        self.get_enveloped(&format!("product/{product_id}")).await
    }

    /// Fetch the products listed by one seller.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError` if the request or envelope decoding fails.
    pub async fn fetch_products_by_seller(
        &self,
        seller_id: &ProfileId,
    ) -> Result<Vec<Product>, ApiClientError> {
        self.get_enveloped(&format!("product/seller/{seller_id}"))
            .await
    }

    /// Log in with email and password, returning the bearer token and user.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::Rejected` with the API's message (a fixed
    /// "Invalid credentials" for any bad login).
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiClientError> {
        self.post_auth(
            "auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Create an account with name, email, and password.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::Rejected` with the API's message on
    /// validation failure or duplicate email.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupOutcome, ApiClientError> {
        self.post_auth(
            "auth/signup",
            &serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    /// Resolve a path against the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiClientError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiClientError::MalformedResponse(format!("invalid endpoint path: {e}")))
    }

    /// GET an endpoint and unwrap its `{success, data}` envelope.
    async fn get_enveloped<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        let url = self.endpoint(path)?;
        debug!(%url, "api fetch");

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiClientError::NotFound);
        }

        if !status.is_success() {
            let message = response
                .json::<ApiResponse<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| "unexpected error".to_owned());
            return Err(ApiClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope
            .data
            .ok_or_else(|| ApiClientError::MalformedResponse("envelope carried no data".to_owned()))
    }

    /// POST a JSON body to an auth endpoint, decoding the bare `{message, ...}` shape.
    async fn post_auth<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiClientError> {
        let url = self.endpoint(path)?;

        let response = self.inner.client.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<MessageBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "unexpected error".to_owned());
            return Err(ApiClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
