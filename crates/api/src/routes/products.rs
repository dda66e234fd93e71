//! Product route handlers.
//!
//! Reads are public; every mutating route requires a bearer token. Each
//! handler performs exactly one service call and wraps the outcome in the
//! `{success, data?, message?}` envelope.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use tradewithus_core::{ApiResponse, Product, ProductId, ProfileId};

use crate::error::{ApiError, Result};
use crate::middleware::AuthUser;
use crate::models::product::{ProductData, product_violation_message};
use crate::services::ProductService;
use crate::state::AppState;

/// Handle `GET /product/all`.
pub async fn get_all(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = ProductService::new(state.pool()).get_all().await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// Handle `GET /product/{productId}`.
pub async fn get(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ApiResponse<Product>>> {
    let product_id = parse_key(&product_id)?;

    let product = ProductService::new(state.pool())
        .get(&product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_owned()))?;

    Ok(Json(ApiResponse::ok(product)))
}

/// Handle `GET /product/seller/{sellerId}`.
///
/// Returns an empty list for an unknown seller; a missing profile is not an
/// error here because seller references are not enforced.
pub async fn get_by_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let seller_id =
        ProfileId::parse(&seller_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let products = ProductService::new(state.pool())
        .get_by_seller(&seller_id)
        .await?;

    Ok(Json(ApiResponse::ok(products)))
}

/// Handle `POST /product`.
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ProductData>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>)> {
    let product = validate_payload(payload)?;

    let created = ProductService::new(state.pool()).create(&product).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// Handle `PUT /product/{productId}`.
///
/// Full-document replace: the stored product becomes exactly the supplied
/// payload.
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(payload): Json<ProductData>,
) -> Result<Json<ApiResponse<Product>>> {
    let product_id = parse_key(&product_id)?;
    let product = validate_payload(payload)?;

    let updated = ProductService::new(state.pool())
        .update(&product_id, &product)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_owned()))?;

    Ok(Json(ApiResponse::ok(updated)))
}

/// Handle `DELETE /product/{productId}`.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let product_id = parse_key(&product_id)?;

    let deleted = ProductService::new(state.pool()).delete(&product_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Product not found".to_owned()));
    }

    Ok(Json(ApiResponse::ok_message(
        "Product deleted successfully".to_owned(),
    )))
}

/// Parse a path segment into a product business key.
fn parse_key(raw: &str) -> Result<ProductId> {
    ProductId::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Run the category-ordered checks and convert the payload into a domain document.
fn validate_payload(payload: ProductData) -> Result<Product> {
    if let Err(errors) = payload.validate() {
        return Err(ApiError::BadRequest(
            product_violation_message(&errors).to_owned(),
        ));
    }

    payload
        .into_product()
        .ok_or_else(|| ApiError::BadRequest("Missing required product fields".to_owned()))
}
