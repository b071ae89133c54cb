/// Service interfaces
pub mod interfaces;
/// API data models
pub mod models;
/// Service implementations
pub mod services;
