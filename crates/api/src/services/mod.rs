//! Business services.
//!
//! One service per entity, each a stateless set of operations bound to an
//! injected store handle. Constructed per-request; no global singletons.

pub mod auth;
pub mod products;
pub mod profiles;

pub use auth::AuthService;
pub use products::ProductService;
pub use profiles::ProfileService;
