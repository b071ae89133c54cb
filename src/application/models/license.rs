use crate::application::models::entity::Relationship;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of federation license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    /// Club or federation executive
    Executive,
    /// Player
    Player,
    /// Referee
    Referee,
    /// Staff member
    Staff,
}

impl fmt::Display for LicenseType {
    // Lowercase, as the API filter syntax expects
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LicenseType::Executive => "executive",
            LicenseType::Player => "player",
            LicenseType::Referee => "referee",
            LicenseType::Staff => "staff",
        };
        write!(f, "{name}")
    }
}

/// A license entity as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    /// Entity type tag, always `license`
    #[serde(rename = "type")]
    pub entity_type: String,
    /// License ID
    pub id: String,
    /// License attributes
    pub attributes: LicenseAttributes,
    /// Named links to related entities, e.g. `profile`
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

/// Attributes of a license
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseAttributes {
    /// License kind
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    /// Expiration date, null while the license is open-ended
    pub expiration: Option<NaiveDate>,
}

/// PATCH body for updating a license's expiration date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LicenseUpdateRequest {
    /// Updated entity
    pub data: LicenseUpdateData,
}

/// `data` member of a license update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LicenseUpdateData {
    /// Entity type tag, always `license`
    #[serde(rename = "type")]
    pub entity_type: String,
    /// ID of the license being updated
    pub id: String,
    /// Attributes to change
    pub attributes: LicenseUpdateAttributes,
}

/// Attributes changed by a license update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LicenseUpdateAttributes {
    /// New expiration date
    pub expiration: NaiveDate,
}

impl LicenseUpdateRequest {
    /// Builds the update body for one license
    ///
    /// # Arguments
    /// * `id` - License ID
    /// * `expiration` - New expiration date
    pub fn new(id: &str, expiration: NaiveDate) -> Self {
        Self {
            data: LicenseUpdateData {
                entity_type: String::from("license"),
                id: id.to_string(),
                attributes: LicenseUpdateAttributes { expiration },
            },
        }
    }
}
