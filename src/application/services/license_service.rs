use crate::application::interfaces::LicenseService;
use crate::application::models::envelope::ResourceEnvelope;
use crate::application::models::license::{License, LicenseType, LicenseUpdateRequest};
use crate::constants::LICENSES_PAGE_SIZE;
use crate::error::AppError;
use crate::transport::http_client::{LeveradeHttpClient, RequestOptions};
use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Switches for the bulk expiration update
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy)]
pub struct UpdateOptions {
    /// Overwrite licenses that already carry an expiration date
    pub erase_existing: bool,
    /// Log planned updates without sending any PATCH
    pub dry_run: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            erase_existing: false,
            dry_run: true,
        }
    }
}

/// Outcome of a bulk expiration update
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct UpdateSummary {
    /// IDs of licenses that were patched (or would be, in a dry run)
    pub updated: Vec<String>,
    /// IDs of licenses skipped because they already had an expiration date
    pub skipped: Vec<String>,
    /// Whether this run was a dry run
    pub dry_run: bool,
}

/// Implementation of the license service
pub struct LicenseServiceImpl<T: LeveradeHttpClient> {
    client: Arc<T>,
}

impl<T: LeveradeHttpClient> LicenseServiceImpl<T> {
    /// Creates a new instance of the license service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: LeveradeHttpClient + 'static> LicenseService for LicenseServiceImpl<T> {
    async fn get_licenses(
        &self,
        season_id: u64,
        license_type: LicenseType,
    ) -> Result<ResourceEnvelope<License>, AppError> {
        info!("Getting {} licenses for season {}", license_type, season_id);

        let envelope = self
            .client
            .send_request::<License>(
                "licenses",
                RequestOptions {
                    filter: Some(format!("season.id:{season_id},type:{license_type}")),
                    page_number: Some(1),
                    page_size: Some(LICENSES_PAGE_SIZE),
                    ..Default::default()
                },
            )
            .await?;

        debug!("Licenses obtained: {}", envelope.data.len());
        Ok(envelope)
    }

    async fn set_licenses_expiration(
        &self,
        season_id: u64,
        license_type: LicenseType,
        new_expiration: NaiveDate,
        options: &UpdateOptions,
    ) -> Result<UpdateSummary, AppError> {
        let envelope = self.get_licenses(season_id, license_type).await?;

        let mut summary = UpdateSummary {
            dry_run: options.dry_run,
            ..Default::default()
        };

        for license in &envelope.data {
            if !options.erase_existing && license.attributes.expiration.is_some() {
                info!("License {} already has an expiration date", license.id);
                summary.skipped.push(license.id.clone());
                continue;
            }

            let body = LicenseUpdateRequest::new(&license.id, new_expiration);

            if options.dry_run {
                info!(
                    "Dry run: license {} would get its expiration date set to {}",
                    license.id, new_expiration
                );
            } else {
                self.client
                    .send_request::<License>(
                        &format!("licenses/{}", license.id),
                        RequestOptions {
                            method: Method::PATCH,
                            headers: vec![(
                                String::from("Content-Type"),
                                String::from("application/json"),
                            )],
                            body: Some(serde_json::to_string(&body)?),
                            ..Default::default()
                        },
                    )
                    .await?;
                info!(
                    "License {} got its expiration date set to {}",
                    license.id, new_expiration
                );
            }
            summary.updated.push(license.id.clone());
        }

        info!(
            "Expiration update finished: {} updated, {} skipped{}",
            summary.updated.len(),
            summary.skipped.len(),
            if summary.dry_run { " (dry run)" } else { "" }
        );
        Ok(summary)
    }
}
