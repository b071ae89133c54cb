use crate::application::models::envelope::ResourceEnvelope;
use crate::application::models::license::{License, LicenseType};
use crate::application::services::license_service::{UpdateOptions, UpdateSummary};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Interface for the license service
#[async_trait]
pub trait LicenseService: Send + Sync {
    /// Gets one page of licenses for a season and license kind
    ///
    /// # Arguments
    /// * `season_id` - Season to filter on
    /// * `license_type` - License kind to filter on
    ///
    /// # Returns
    /// * The first page of matching licenses, fetched with the bulk page size
    async fn get_licenses(
        &self,
        season_id: u64,
        license_type: LicenseType,
    ) -> Result<ResourceEnvelope<License>, AppError>;

    /// Sets the expiration date on every matching license
    ///
    /// Licenses that already carry an expiration date are skipped unless
    /// `erase_existing` is set; with `dry_run` set, planned updates are
    /// logged but nothing is written.
    ///
    /// # Arguments
    /// * `season_id` - Season to filter on
    /// * `license_type` - License kind to filter on
    /// * `new_expiration` - Expiration date to set
    /// * `options` - Overwrite and dry-run switches
    ///
    /// # Returns
    /// * Summary of updated and skipped license IDs
    async fn set_licenses_expiration(
        &self,
        season_id: u64,
        license_type: LicenseType,
        new_expiration: NaiveDate,
        options: &UpdateOptions,
    ) -> Result<UpdateSummary, AppError>;
}
