//! Bulk-sets the expiration date of a season's licenses.
//!
//! There are no CLI arguments: the run is parameterized by the constants
//! below, edited before running. `DRY_RUN` defaults to true; flip it to
//! actually send the PATCH requests.

use leverade_client::prelude::*;

/// Season whose licenses are updated
const SEASON_ID: u64 = 6717;
/// License kind to update
const LICENSE_TYPE: LicenseType = LicenseType::Player;
/// Expiration date to set, ISO format
const NEW_EXPIRATION: &str = "2024-06-30";
/// Overwrite licenses that already carry an expiration date
const ERASE_EXISTING: bool = false;
/// Log planned updates without writing anything
const DRY_RUN: bool = true;

#[tokio::main]
async fn main() {
    setup_logger();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Arc::new(Config::from_env()?);
    let new_expiration: NaiveDate = NEW_EXPIRATION.parse()?;

    let session = LeveradeAuth::new(&config).authenticate().await?;
    let client = Arc::new(LeveradeHttpClientImpl::new(config.clone(), session));
    let service = LicenseServiceImpl::new(client);

    let summary = service
        .set_licenses_expiration(
            SEASON_ID,
            LICENSE_TYPE,
            new_expiration,
            &UpdateOptions {
                erase_existing: ERASE_EXISTING,
                dry_run: DRY_RUN,
            },
        )
        .await?;

    info!(
        "Done: {} licenses updated, {} skipped{}",
        summary.updated.len(),
        summary.skipped.len(),
        if summary.dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}
