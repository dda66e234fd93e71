//! Home feed route handler.
//!
//! Fetches all profiles and all products, then attaches each product's
//! seller with one concurrent lookup per product. A failed seller lookup
//! degrades that one card to an "Unknown Seller" placeholder; the page
//! itself only fails if the primary feeds do.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use tokio::task::JoinSet;

use tradewithus_core::{Product, Profile};

use crate::error::Result;
use crate::routes::logged_in;
use crate::state::AppState;

/// Fallback seller name for orphaned listings.
const UNKNOWN_SELLER: &str = "Unknown Seller";

/// A product card with its resolved seller.
pub struct ProductCard {
    pub product: Product,
    pub seller_name: String,
    pub seller_verified: bool,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub profiles: Vec<Profile>,
    pub products: Vec<ProductCard>,
    pub logged_in: bool,
}

/// Display the home feed.
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Result<HomeTemplate> {
    let api = state.api();

    let profiles = api.fetch_profiles().await?;
    let products = api.fetch_products().await?;

    // One seller lookup per product, all in flight at once
    let mut lookups = JoinSet::new();
    for (index, product) in products.iter().enumerate() {
        let api = api.clone();
        let seller_id = product.seller_id.clone();
        lookups.spawn(async move { (index, api.fetch_profile(&seller_id).await) });
    }

    let mut sellers: Vec<Option<Profile>> = Vec::new();
    sellers.resize_with(products.len(), || None);
    while let Some(joined) = lookups.join_next().await {
        if let Ok((index, Ok(seller))) = joined
            && let Some(slot) = sellers.get_mut(index)
        {
            *slot = Some(seller);
        }
    }

    let products = products
        .into_iter()
        .zip(sellers)
        .map(|(product, seller)| ProductCard {
            seller_name: seller
                .as_ref()
                .map_or_else(|| UNKNOWN_SELLER.to_owned(), |s| s.business_name.clone()),
            seller_verified: seller.as_ref().is_some_and(|s| s.is_verified),
            product,
        })
        .collect();

    Ok(HomeTemplate {
        profiles,
        products,
        logged_in: logged_in(&jar),
    })
}
