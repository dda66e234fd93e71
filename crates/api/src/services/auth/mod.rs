//! Authentication service.
//!
//! Password signup/login with Argon2id hashing and signed, time-limited
//! bearer tokens. The token is the only session state: verification checks
//! signature and expiry, nothing else (no revocation list, no refresh flow).

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;

use tradewithus_core::{Email, UserId};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::auth::Claims;
use crate::models::user::User;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Bearer-token lifetime in hours.
const TOKEN_TTL_HOURS: i64 = 24;

/// Authentication service.
///
/// Handles signup, login, token issue/verify, and self-service account
/// deletion.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    jwt_secret: &'a SecretString,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, jwt_secret: &'a SecretString) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt_secret,
        }
    }

    /// Register a new user with name, email, and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        // Validate and normalize email
        let email = Email::parse(email)?;

        // Validate password
        validate_password(password)?;

        // Hash password
        let password_hash = hash_password(password)?;

        // Create user
        let user = self
            .users
            .create(&email, &password_hash, name)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with email and password, issuing a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` whether the email is unknown
    /// or the password is wrong; the two cases are indistinguishable.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        // Normalize the email the same way signup did
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Verify password
        verify_password(password, &user.password_hash)?;

        let token = create_token(&user, self.jwt_secret)?;

        Ok((token, user))
    }

    /// Verify a bearer token's signature and expiry and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` on any verification failure.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode_token(token, self.jwt_secret)
    }

    /// Delete the target account on behalf of `requester`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the target does not exist.
    /// Returns `AuthError::NotAccountOwner` unless `requester` is the target.
    pub async fn delete_user(&self, requester: UserId, target: UserId) -> Result<bool, AuthError> {
        let user = self
            .users
            .get_by_id(target)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if requester != user.id {
            return Err(AuthError::NotAccountOwner);
        }

        let deleted = self.users.delete(target).await?;
        Ok(deleted)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id with a per-record random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Sign a 24h bearer token carrying the user's `{userId, email, name}`.
pub fn create_token(user: &User, secret: &SecretString) -> Result<String, AuthError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::hours(TOKEN_TTL_HOURS);

    let claims = Claims {
        user_id: user.id,
        email: user.email.to_string(),
        name: user.name.clone(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|_| AuthError::TokenCreation)
}

/// Decode a bearer token, checking signature and expiry only.
pub fn decode_token(token: &str, secret: &SecretString) -> Result<Claims, AuthError> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidToken)?;

    Ok(token_data.claims)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tradewithus_core::Email;

    fn test_secret() -> SecretString {
        SecretString::from("kY8$vN3q!mW6z@pT1rX9&cJ4hL7*uD2e")
    }

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: UserId::generate(),
            email: Email::parse("jane@example.com").unwrap(),
            password_hash: String::new(),
            name: "Jane Buyer".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("correct horse").unwrap();
        assert!(matches!(
            verify_password("battery staple", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_use_random_salts() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_password_length_policy() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_token_roundtrip() {
        let secret = test_secret();
        let user = test_user();

        let token = create_token(&user, &secret).unwrap();
        let claims = decode_token(&token, &secret).unwrap();

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.name, "Jane Buyer");
    }

    #[test]
    fn test_token_expiry_is_24h() {
        let secret = test_secret();
        let token = create_token(&test_user(), &secret).unwrap();
        let claims = decode_token(&token, &secret).unwrap();

        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, Duration::hours(24).num_seconds());
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = create_token(&test_user(), &test_secret()).unwrap();
        let other = SecretString::from("zQ5#wE8r!tY2u@iO6pA3s&dF9g*hJ1kL");
        assert!(matches!(
            decode_token(&token, &other),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_rejects_tampering() {
        let secret = test_secret();
        let token = create_token(&test_user(), &secret).unwrap();

        // Flip a character in the payload segment
        let mut tampered: Vec<String> = token.split('.').map(ToOwned::to_owned).collect();
        let payload = tampered.get_mut(1).unwrap();
        let flipped = if payload.ends_with('A') { "B" } else { "A" };
        payload.replace_range(payload.len() - 1.., flipped);
        let tampered = tampered.join(".");

        assert!(matches!(
            decode_token(&tampered, &secret),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let secret = test_secret();
        let user = test_user();
        let now = Utc::now();

        // Hand-craft a token that expired two hours ago
        let claims = Claims {
            user_id: user.id,
            email: user.email.to_string(),
            name: user.name,
            iat: (now - Duration::hours(26)).timestamp(),
            exp: (now - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            decode_token(&token, &secret),
            Err(AuthError::InvalidToken)
        ));
    }
}
