//! Authentication route handlers.
//!
//! Thin forms over the API's signup/login endpoints. A successful login
//! stores the bearer token in an HTTP-only cookie; failures redirect back
//! with an error code that the page maps to a message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::client::ApiClientError;
use crate::routes::{TOKEN_COOKIE, logged_in};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Map a redirect error code to a display message.
fn error_message(code: &str) -> String {
    match code {
        "credentials" => "Invalid email or password".to_owned(),
        "exists" => "An account with this email already exists".to_owned(),
        "invalid" => "Please check the form and try again".to_owned(),
        _ => "Something went wrong, please try again".to_owned(),
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
    pub logged_in: bool,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub error: Option<String>,
    pub logged_in: bool,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>, jar: CookieJar) -> LoginTemplate {
    LoginTemplate {
        error: query.error.as_deref().map(error_message),
        success: query
            .success
            .map(|_| "Account created, you can log in now".to_owned()),
        logged_in: logged_in(&jar),
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.api().login(&form.email, &form.password).await {
        Ok(outcome) => {
            let cookie = Cookie::build((TOKEN_COOKIE, outcome.token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            (jar.add(cookie), Redirect::to("/")).into_response()
        }
        Err(ApiClientError::Rejected { .. }) => {
            Redirect::to("/auth/login?error=credentials").into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Login request failed");
            Redirect::to("/auth/login?error=unavailable").into_response()
        }
    }
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn signup_page(Query(query): Query<MessageQuery>, jar: CookieJar) -> SignupTemplate {
    SignupTemplate {
        error: query.error.as_deref().map(error_message),
        logged_in: logged_in(&jar),
    }
}

/// Handle signup form submission.
///
/// Signup does not log the user in; on success they are sent to the login
/// page with a confirmation.
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Redirect {
    match state
        .api()
        .signup(&form.name, &form.email, &form.password)
        .await
    {
        Ok(_) => Redirect::to("/auth/login?success=created"),
        Err(ApiClientError::Rejected { message, .. }) => {
            if message.contains("already exists") {
                Redirect::to("/auth/signup?error=exists")
            } else {
                Redirect::to("/auth/signup?error=invalid")
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Signup request failed");
            Redirect::to("/auth/signup?error=unavailable")
        }
    }
}

// =============================================================================
// Logout
// =============================================================================

/// Clear the token cookie and return home.
pub async fn logout(jar: CookieJar) -> Response {
    let removal = Cookie::build((TOKEN_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/")).into_response()
}
