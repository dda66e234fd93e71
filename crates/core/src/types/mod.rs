//! Core types for TradeWithUs.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! the entity shapes shared between the API and the web front-end.

pub mod email;
pub mod envelope;
pub mod key;
pub mod product;
pub mod profile;
pub mod user;

pub use email::{Email, EmailError};
pub use envelope::ApiResponse;
pub use key::*;
pub use product::{Price, PriceRange, Product, ProductDetails, ShippingDetails};
pub use profile::{Certification, ImportExport, Profile, Verifications};
pub use user::UserInfo;
