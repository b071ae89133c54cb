/// License service implementation
pub mod license_service;

pub use license_service::{LicenseServiceImpl, UpdateOptions, UpdateSummary};
