//! Company profile domain types.
//!
//! A profile is a seller/company record addressed by its [`ProfileId`]
//! business key. The wire names are camelCase to match the public REST
//! surface.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::types::key::ProfileId;

/// A company profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique business key, immutable after creation.
    pub profile_id: ProfileId,
    pub business_name: String,
    pub logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_pro: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<String>,
    pub business_overview: String,
    pub business_type: String,
    pub origin: String,
    /// Year the company was established.
    pub established: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Name of the company representative.
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifications: Option<Verifications>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<Certification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_export: Option<ImportExport>,
}

impl Profile {
    /// Company age derived from the `established` year, e.g. `"12 Years Old"`.
    #[must_use]
    pub fn age(&self) -> String {
        let years = Utc::now().year().saturating_sub(self.established);
        format!("{years} Years Old")
    }
}

/// Which verification checks the company has passed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Verifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_profile: Option<bool>,
}

/// A certification held by the company (e.g. an export quality mark).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub icon: String,
    pub valid_from: String,
    pub valid_to: String,
}

/// Import/export trading activity figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_shipments: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_suppliers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_volume: Option<String>,
}
