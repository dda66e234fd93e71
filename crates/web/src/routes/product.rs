//! Product detail page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum_extra::extract::cookie::CookieJar;

use tradewithus_core::{Product, ProductId, Profile};

use crate::error::{Result, WebError};
use crate::routes::logged_in;
use crate::state::AppState;

/// Fallback seller name for orphaned listings.
const UNKNOWN_SELLER: &str = "Unknown Seller";

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub product: Product,
    pub seller_name: String,
    pub seller: Option<Profile>,
    pub logged_in: bool,
}

/// Display a product page by its business key.
///
/// An unknown product renders the not-found page. The seller lookup is a
/// secondary fetch: an orphaned listing (seller deleted) degrades to the
/// "Unknown Seller" placeholder. The product's own `sellerId` is
/// authoritative; the company segment of the URL is routing only.
pub async fn show(
    State(state): State<AppState>,
    Path((_company_id, product_id)): Path<(String, String)>,
    jar: CookieJar,
) -> Result<ProductTemplate> {
    let product_id = ProductId::parse(&product_id).map_err(|_| WebError::PageNotFound)?;

    let product = state.api().fetch_product(&product_id).await?;

    let seller = state.api().fetch_profile(&product.seller_id).await.ok();

    Ok(ProductTemplate {
        seller_name: seller
            .as_ref()
            .map_or_else(|| UNKNOWN_SELLER.to_owned(), |s| s.business_name.clone()),
        product,
        seller,
        logged_in: logged_in(&jar),
    })
}
