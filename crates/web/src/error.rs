//! Page-level error handling.
//!
//! A failed fetch beyond the documented degradations renders the not-found
//! page or a plain 500; there is no retry or backoff. Server errors are
//! captured to Sentry before responding.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::client::ApiClientError;

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Application-level error type for the web front-end.
#[derive(Debug, Error)]
pub enum WebError {
    /// API fetch failed.
    #[error("api error: {0}")]
    Api(#[from] ApiClientError),

    /// Page target does not exist.
    #[error("page not found")]
    PageNotFound,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        // A missing entity renders the not-found page
        if matches!(self, Self::PageNotFound | Self::Api(ApiClientError::NotFound)) {
            return (StatusCode::NOT_FOUND, NotFoundTemplate).into_response();
        }

        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Page render error"
        );

        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
    }
}

/// Result type alias for `WebError`.
pub type Result<T> = std::result::Result<T, WebError>;
