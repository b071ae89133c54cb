//! # Leverade Client Prelude
//!
//! Convenient single import for the types and traits most interactions
//! need.
//!
//! ## Usage
//!
//! ```rust
//! use leverade_client::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Leverade API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handshake for the Leverade accounts service
pub use crate::session::auth::LeveradeAuth;

/// Session value and authenticator trait
pub use crate::session::interface::{LeveradeAuthenticator, LeveradeSession};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait and implementation
pub use crate::transport::http_client::{
    LeveradeHttpClient, LeveradeHttpClientImpl, RequestOptions, ResponseMode,
};

// ============================================================================
// SERVICES
// ============================================================================

/// License service trait
pub use crate::application::interfaces::LicenseService;

/// License service implementation and update types
pub use crate::application::services::{LicenseServiceImpl, UpdateOptions, UpdateSummary};

// ============================================================================
// MODELS
// ============================================================================

/// JSON:API envelope types
pub use crate::application::models::envelope::{
    ApiErrorObject, EnvelopeLinks, EnvelopeMeta, Pagination, ResourceEnvelope,
};

/// Generic entities and relationship references
pub use crate::application::models::entity::{BaseEntity, Entity, Relationship, RelationshipData};

/// License models
pub use crate::application::models::license::{
    License, LicenseAttributes, LicenseType, LicenseUpdateRequest,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use chrono::NaiveDate;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
