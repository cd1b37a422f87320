//! Shared constants for the YOURLS client.

/// Client identifier sent as the User-Agent header on every request.
pub const USER_AGENT: &str = concat!("yourls-rs/", env!("CARGO_PKG_VERSION"));

/// Name of the API entry point script, appended to the base address.
pub const API_SCRIPT: &str = "yourls-api.php";

/// Output format requested from the server on every call.
pub const OUTPUT_FORMAT: &str = "json";

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Error code the server returns when a URL is already in the database.
pub const CODE_URL_EXISTS: &str = "error:url";

/// Separator between the "error" prefix and the detail in message fields.
pub const ERROR_DETAIL_SEPARATOR: &str = ": ";
