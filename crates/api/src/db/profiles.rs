//! Profile repository for database operations.
//!
//! Profiles are addressed by the `profile_id` business key; the internal
//! row identifier never leaves this module. Nested sub-documents live in
//! `JSONB` columns and are decoded through `sqlx::types::Json`.

use sqlx::PgPool;
use sqlx::types::Json;

use tradewithus_core::{Certification, ImportExport, Profile, ProfileId, Verifications};

use super::{RepositoryError, conflict_on_unique};

/// Select list shared by every query that reads a full profile row.
const PROFILE_COLUMNS: &str = "profile_id, business_name, logo, cover_image, is_pro, \
     is_verified, revenue, employee_count, business_overview, business_type, origin, \
     established, export_volume, website, address, mobile, owner, verifications, \
     certifications, import_export";

/// Database row shape for a profile.
#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: ProfileId,
    business_name: String,
    logo: String,
    cover_image: Option<String>,
    is_pro: bool,
    is_verified: bool,
    revenue: Option<String>,
    employee_count: Option<String>,
    business_overview: String,
    business_type: String,
    origin: String,
    established: i32,
    export_volume: Option<String>,
    website: Option<String>,
    address: String,
    mobile: Option<String>,
    owner: String,
    verifications: Option<Json<Verifications>>,
    certifications: Json<Vec<Certification>>,
    import_export: Option<Json<ImportExport>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            profile_id: row.profile_id,
            business_name: row.business_name,
            logo: row.logo,
            cover_image: row.cover_image,
            is_pro: row.is_pro,
            is_verified: row.is_verified,
            revenue: row.revenue,
            employee_count: row.employee_count,
            business_overview: row.business_overview,
            business_type: row.business_type,
            origin: row.origin,
            established: row.established,
            export_volume: row.export_volume,
            website: row.website,
            address: row.address,
            mobile: row.mobile,
            owner: row.owner,
            verifications: row.verifications.map(|v| v.0),
            certifications: row.certifications.0,
            import_export: row.import_export.map(|v| v.0),
        }
    }
}

/// Repository for profile database operations.
pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    /// Create a new profile repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a profile by its business key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, profile_id: &ProfileId) -> Result<Option<Profile>, RepositoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE profile_id = $1"
        ))
        .bind(profile_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Profile::from))
    }

    /// Get all profiles in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    /// Create a new profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the business key already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, profile: &Profile) -> Result<Profile, RepositoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "INSERT INTO profiles (profile_id, business_name, logo, cover_image, is_pro, \
                 is_verified, revenue, employee_count, business_overview, business_type, \
                 origin, established, export_volume, website, address, mobile, owner, \
                 verifications, certifications, import_export) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
                 $16, $17, $18, $19, $20) \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(&profile.profile_id)
        .bind(&profile.business_name)
        .bind(&profile.logo)
        .bind(&profile.cover_image)
        .bind(profile.is_pro)
        .bind(profile.is_verified)
        .bind(&profile.revenue)
        .bind(&profile.employee_count)
        .bind(&profile.business_overview)
        .bind(&profile.business_type)
        .bind(&profile.origin)
        .bind(profile.established)
        .bind(&profile.export_volume)
        .bind(&profile.website)
        .bind(&profile.address)
        .bind(&profile.mobile)
        .bind(&profile.owner)
        .bind(profile.verifications.as_ref().map(Json))
        .bind(Json(&profile.certifications))
        .bind(profile.import_export.as_ref().map(Json))
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "profileId already exists"))?;

        Ok(row.into())
    }

    /// Replace an existing profile wholesale.
    ///
    /// Every column except the immutable business key is overwritten with the
    /// supplied document; optional fields omitted from it are cleared.
    /// Returns `None` when no profile exists for the key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        profile_id: &ProfileId,
        profile: &Profile,
    ) -> Result<Option<Profile>, RepositoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "UPDATE profiles SET business_name = $2, logo = $3, cover_image = $4, \
                 is_pro = $5, is_verified = $6, revenue = $7, employee_count = $8, \
                 business_overview = $9, business_type = $10, origin = $11, \
                 established = $12, export_volume = $13, website = $14, address = $15, \
                 mobile = $16, owner = $17, verifications = $18, certifications = $19, \
                 import_export = $20, updated_at = now() \
             WHERE profile_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(profile_id)
        .bind(&profile.business_name)
        .bind(&profile.logo)
        .bind(&profile.cover_image)
        .bind(profile.is_pro)
        .bind(profile.is_verified)
        .bind(&profile.revenue)
        .bind(&profile.employee_count)
        .bind(&profile.business_overview)
        .bind(&profile.business_type)
        .bind(&profile.origin)
        .bind(profile.established)
        .bind(&profile.export_volume)
        .bind(&profile.website)
        .bind(&profile.address)
        .bind(&profile.mobile)
        .bind(&profile.owner)
        .bind(profile.verifications.as_ref().map(Json))
        .bind(Json(&profile.certifications))
        .bind(profile.import_export.as_ref().map(Json))
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Profile::from))
    }

    /// Delete a profile by its business key.
    ///
    /// # Returns
    ///
    /// Returns `true` if a profile was deleted, `false` if none existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, profile_id: &ProfileId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM profiles WHERE profile_id = $1")
            .bind(profile_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether any profiles exist in the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self) -> Result<bool, RepositoryError> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM profiles)")
            .fetch_one(self.pool)
            .await?;

        Ok(row.0)
    }
}
