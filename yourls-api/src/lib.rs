//! YOURLS API - HTTP client for the YOURLS URL-shortener HTTP API.
//!
//! This crate translates method calls into signed, form-encoded POST
//! requests against a remote installation's `yourls-api.php`, decodes the
//! JSON responses, and maps the service's error envelopes to typed errors.
//! One method per API action: shorten, update, expand, stats, delete,
//! url_stats.

pub mod client;
pub mod endpoints;
pub mod request;
pub mod response;

// Re-export key types
pub use client::YourlsClient;
pub use endpoints::ShortenOptions;
pub use response::ApiResponse;
