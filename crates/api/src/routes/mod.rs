//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Liveness check
//! GET    /health/ready              - Readiness check (verifies database)
//!
//! # Auth
//! POST   /auth/signup               - Create user
//! POST   /auth/login                - Issue bearer token
//! GET    /auth/me                   - Decode token payload (bearer)
//! DELETE /auth/user/{userId}        - Delete own account (bearer, self-only)
//!
//! # Profiles
//! GET    /profile/all               - List all profiles
//! GET    /profile/{profileId}       - Profile by business key
//! POST   /profile                   - Create profile (bearer)
//! PUT    /profile/{profileId}       - Replace profile (bearer)
//! DELETE /profile/{profileId}       - Delete profile (bearer)
//!
//! # Products
//! GET    /product/all               - List all products
//! GET    /product/seller/{sellerId} - Products listed by one seller
//! GET    /product/{productId}       - Product by business key
//! POST   /product                   - Create product (bearer)
//! PUT    /product/{productId}       - Replace product (bearer)
//! DELETE /product/{productId}       - Delete product (bearer)
//! ```

pub mod auth;
pub mod products;
pub mod profiles;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
        .route("/user/{userId}", delete(auth::delete_user))
}

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(profiles::create))
        .route("/all", get(profiles::get_all))
        .route(
            "/{profileId}",
            get(profiles::get)
                .put(profiles::update)
                .delete(profiles::delete),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/all", get(products::get_all))
        .route("/seller/{sellerId}", get(products::get_by_seller))
        .route(
            "/{productId}",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/profile", profile_routes())
        .nest("/product", product_routes())
}
