//! Request payloads and API-internal domain types.
//!
//! The entity shapes shared with the web front-end live in
//! `tradewithus-core`; this module holds what only the API needs: the full
//! user record (with its password hash), token claims, and the validated
//! write payloads.

pub mod auth;
pub mod product;
pub mod profile;
pub mod user;
