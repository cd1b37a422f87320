//! YOURLS Core - foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the API client crate:
//! - Client configuration (installation address, auth mode, request timeout)
//! - Unified error types covering every failure category
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{AuthConfig, ClientConfig};
pub use error::{YourlsError, YourlsResult};
pub use logging::init_console_logging;
