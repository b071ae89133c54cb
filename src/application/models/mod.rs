/// Generic JSON:API entities and relationship references
pub mod entity;
/// Response envelope, pagination metadata and error objects
pub mod envelope;
/// License entities and update request bodies
pub mod license;
/// Serde helpers for the envelope
pub mod serialization;
