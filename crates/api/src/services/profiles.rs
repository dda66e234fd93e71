//! Profile service.
//!
//! Thin orchestration over the profile repository; every operation performs
//! exactly one data-access call.

use sqlx::PgPool;

use tradewithus_core::{Profile, ProfileId};

use crate::db::RepositoryError;
use crate::db::profiles::ProfileRepository;

/// Service for profile operations.
pub struct ProfileService<'a> {
    profiles: ProfileRepository<'a>,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            profiles: ProfileRepository::new(pool),
        }
    }

    /// Get a profile by its business key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn get(&self, profile_id: &ProfileId) -> Result<Option<Profile>, RepositoryError> {
        self.profiles.get(profile_id).await
    }

    /// Get all profiles.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn get_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        self.profiles.get_all().await
    }

    /// Create a new profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate business key.
    pub async fn create(&self, profile: &Profile) -> Result<Profile, RepositoryError> {
        self.profiles.create(profile).await
    }

    /// Replace an existing profile wholesale; `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn update(
        &self,
        profile_id: &ProfileId,
        profile: &Profile,
    ) -> Result<Option<Profile>, RepositoryError> {
        self.profiles.update(profile_id, profile).await
    }

    /// Delete a profile; `true` iff a document was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn delete(&self, profile_id: &ProfileId) -> Result<bool, RepositoryError> {
        self.profiles.delete(profile_id).await
    }

    /// Check whether any profiles exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn exists(&self) -> Result<bool, RepositoryError> {
        self.profiles.exists().await
    }
}
