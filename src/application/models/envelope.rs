use crate::application::models::entity::Entity;
use crate::application::models::serialization::one_or_many;
use serde::{Deserialize, Serialize};

/// Top-level JSON:API response shape
///
/// Wraps the returned resources plus the optional `included` sidecar,
/// pagination metadata and links. Error documents parse into an envelope
/// with empty `data` and a populated `errors` member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResourceEnvelope<T> {
    /// Ordered sequence of returned entities
    #[serde(default, deserialize_with = "one_or_many")]
    pub data: Vec<T>,
    /// Related entities referenced from `data` relationships
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Entity>>,
    /// Response metadata, currently only pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<EnvelopeMeta>,
    /// Pagination links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<EnvelopeLinks>,
    /// JSON:API error objects, present in error documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiErrorObject>>,
}

/// Metadata member of the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    /// Pagination counters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Pagination counters reported by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of entities matching the request
    pub count: u64,
    /// Number of entities per page
    pub per_page: u64,
    /// 1-based number of the current page
    pub current_page: u64,
}

/// Pagination links reported by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeLinks {
    /// URL of the current page
    #[serde(rename = "self")]
    pub self_link: String,
    /// URL of the first page
    pub first: String,
    /// URL of the next page, absent on the last one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// One JSON:API error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Short, human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Detailed explanation of this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
