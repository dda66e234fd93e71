//! Company page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum_extra::extract::cookie::CookieJar;

use tradewithus_core::{Product, Profile, ProfileId};

use crate::error::{Result, WebError};
use crate::routes::logged_in;
use crate::state::AppState;

/// Company page template.
#[derive(Template, WebTemplate)]
#[template(path = "company.html")]
pub struct CompanyTemplate {
    pub profile: Profile,
    /// Derived display string, e.g. "12 Years Old".
    pub age: String,
    pub products: Vec<Product>,
    pub logged_in: bool,
}

/// Display a company page by its business key.
///
/// An unknown key renders the not-found page. The product listing is a
/// secondary fetch: if it fails the page still renders with an empty list.
pub async fn show(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    jar: CookieJar,
) -> Result<CompanyTemplate> {
    let profile_id = ProfileId::parse(&company_id).map_err(|_| WebError::PageNotFound)?;

    let profile = state.api().fetch_profile(&profile_id).await?;

    let products = state
        .api()
        .fetch_products_by_seller(&profile_id)
        .await
        .unwrap_or_default();

    Ok(CompanyTemplate {
        age: profile.age(),
        profile,
        products,
        logged_in: logged_in(&jar),
    })
}
