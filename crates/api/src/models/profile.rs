//! Profile write payload.
//!
//! Explicit request shape for `POST /profile` and `PUT /profile/{profileId}`
//! with presence validation of the required field list. Fields the original
//! contract treats as optional pass through untouched.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use tradewithus_core::{Certification, ImportExport, Profile, ProfileId, Verifications};

/// Fixed 400 message for a profile payload failing presence checks.
pub const PROFILE_VIOLATION_MESSAGE: &str = "Missing required profile fields";

/// Incoming profile document.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[validate(required, length(min = 1))]
    pub profile_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub business_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub logo: Option<String>,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_pro: bool,
    #[serde(default)]
    pub is_verified: bool,
    pub revenue: Option<String>,
    pub employee_count: Option<String>,
    #[validate(required, length(min = 1))]
    pub business_overview: Option<String>,
    #[validate(required, length(min = 1))]
    pub business_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub origin: Option<String>,
    #[validate(required)]
    pub established: Option<i32>,
    pub export_volume: Option<String>,
    pub website: Option<String>,
    #[validate(required, length(min = 1))]
    pub address: Option<String>,
    pub mobile: Option<String>,
    #[validate(required, length(min = 1))]
    pub owner: Option<String>,
    pub verifications: Option<Verifications>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub import_export: Option<ImportExport>,
}

impl ProfileData {
    /// Convert a validated payload into the domain document.
    ///
    /// Returns `None` if a required field is absent or the business key fails
    /// to parse; callers validate first, so `None` here means a malformed key.
    #[must_use]
    pub fn into_profile(self) -> Option<Profile> {
        Some(Profile {
            profile_id: ProfileId::parse(&self.profile_id?).ok()?,
            business_name: self.business_name?,
            logo: self.logo?,
            cover_image: self.cover_image,
            is_pro: self.is_pro,
            is_verified: self.is_verified,
            revenue: self.revenue,
            employee_count: self.employee_count,
            business_overview: self.business_overview?,
            business_type: self.business_type?,
            origin: self.origin?,
            established: self.established?,
            export_volume: self.export_volume,
            website: self.website,
            address: self.address?,
            mobile: self.mobile,
            owner: self.owner?,
            verifications: self.verifications,
            certifications: self.certifications,
            import_export: self.import_export,
        })
    }
}

/// Fixed violation message for a failed profile payload.
///
/// The profile contract uses a single flat required-field list, so every
/// violation collapses to the same message.
#[must_use]
pub const fn profile_violation_message(_errors: &ValidationErrors) -> &'static str {
    PROFILE_VIOLATION_MESSAGE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_payload() -> ProfileData {
        serde_json::from_str(
            r#"{
                "profileId": "acme-trading",
                "businessName": "Acme Trading",
                "logo": "logo.png",
                "businessOverview": "Fresh produce exporter",
                "businessType": "Exporter",
                "origin": "Kenya",
                "established": 2010,
                "address": "12 Harbour Rd, Mombasa",
                "owner": "J. Mwangi"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_payload_passes_and_converts() {
        let payload = valid_payload();
        assert!(payload.validate().is_ok());

        let profile = payload.into_profile().unwrap();
        assert_eq!(profile.profile_id.as_str(), "acme-trading");
        assert_eq!(profile.established, 2010);
        assert!(!profile.is_pro);
        assert!(profile.certifications.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails_validation() {
        let mut payload = valid_payload();
        payload.business_name = None;
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            profile_violation_message(&errors),
            "Missing required profile fields"
        );
    }

    #[test]
    fn test_empty_required_field_fails_validation() {
        let mut payload = valid_payload();
        payload.logo = Some(String::new());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_optional_fields_pass_through() {
        let mut payload = valid_payload();
        payload.website = Some("https://acme.example".to_owned());
        payload.verifications = Some(Verifications {
            business_email: Some(true),
            ..Verifications::default()
        });
        let profile = payload.into_profile().unwrap();
        assert_eq!(profile.website.as_deref(), Some("https://acme.example"));
        assert_eq!(
            profile.verifications.unwrap().business_email,
            Some(true)
        );
    }

    #[test]
    fn test_whitespace_key_fails_conversion() {
        let mut payload = valid_payload();
        payload.profile_id = Some("   ".to_owned());
        assert!(payload.into_profile().is_none());
    }
}
