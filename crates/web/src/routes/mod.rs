//! HTTP route handlers for the web front-end.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                    - Home feed
//! GET  /health                              - Health check
//!
//! # Auth
//! GET  /auth/login                          - Login page
//! POST /auth/login                          - Login action (sets token cookie)
//! GET  /auth/signup                         - Signup page
//! POST /auth/signup                         - Signup action
//! POST /auth/logout                         - Clear token cookie
//!
//! # Companies & products
//! GET  /{companyId}                         - Company page
//! GET  /{companyId}/product/{productId}     - Product detail page
//! ```

pub mod auth;
pub mod company;
pub mod home;
pub mod product;

use axum::{
    Router,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;

/// Name of the HTTP-only cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "tw_token";

/// Whether the request carries a token cookie.
///
/// Purely presentational: pages only use this to switch the header between
/// login links and the logout button. The API re-verifies the token on every
/// protected call.
#[must_use]
pub fn logged_in(jar: &CookieJar) -> bool {
    jar.get(TOKEN_COOKIE).is_some()
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the web front-end.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home feed
        .route("/", get(home::home))
        // Auth pages
        .nest("/auth", auth_routes())
        // Company and product pages (catch-all segments registered last)
        .route("/{companyId}", get(company::show))
        .route("/{companyId}/product/{productId}", get(product::show))
}
