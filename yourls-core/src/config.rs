//! Client configuration.
//!
//! Holds the installation address, authentication mode, and request timeout
//! for one YOURLS server. The configuration is validated and normalized at
//! construction and never mutated afterwards. The core reads no files and
//! no environment variables; callers build this programmatically.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants;
use crate::error::{YourlsError, YourlsResult};

/// Authentication mode for a YOURLS installation.
///
/// Exactly one mode is active per client: a username/password pair or a
/// pre-computed signature token. Both are sent as plain form fields, which
/// is all the remote API supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthConfig {
    /// Username/password authentication.
    Credentials {
        /// Account username.
        username: String,
        /// Account password.
        password: String,
    },
    /// Signature-token authentication.
    Signature {
        /// The signature token from the installation's admin tools page.
        signature: String,
    },
}

impl AuthConfig {
    /// Username/password auth. Both values must be non-empty.
    pub fn credentials(username: &str, password: &str) -> YourlsResult<Self> {
        if username.is_empty() {
            return Err(YourlsError::Param("user".into()));
        }
        if password.is_empty() {
            return Err(YourlsError::Param("passwd".into()));
        }
        Ok(Self::Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Signature-token auth. The token must be non-empty.
    pub fn signature(key: &str) -> YourlsResult<Self> {
        if key.is_empty() {
            return Err(YourlsError::Param("key".into()));
        }
        Ok(Self::Signature {
            signature: key.to_string(),
        })
    }

    /// Resolve the auth mode from optional constructor-style arguments.
    ///
    /// A complete username/password pair always wins; a signature key
    /// supplied alongside one is ignored. Without a complete pair, a
    /// signature key selects signature auth. Neither is a parameter error.
    pub fn resolve(
        user: Option<&str>,
        passwd: Option<&str>,
        key: Option<&str>,
    ) -> YourlsResult<Self> {
        match (user, passwd) {
            (Some(user), Some(passwd)) => Self::credentials(user, passwd),
            _ => match key {
                Some(key) => Self::signature(key),
                None => Err(YourlsError::Param(
                    "username and password or signature".into(),
                )),
            },
        }
    }

    /// The form fields this auth mode contributes to every request.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Credentials { username, password } => vec![
                ("username", username.clone()),
                ("password", password.clone()),
            ],
            Self::Signature { signature } => vec![("signature", signature.clone())],
        }
    }
}

/// Connection configuration for one YOURLS installation.
///
/// Deserialization runs through the same address validation as
/// `ClientConfig::new`, so a decoded configuration is never unnormalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawClientConfig")]
pub struct ClientConfig {
    /// Base address of the installation, normalized to end with `/`.
    pub address: String,

    /// Authentication mode.
    pub auth: AuthConfig,

    /// API request timeout in milliseconds.
    pub api_timeout_ms: u64,
}

/// Unvalidated mirror of `ClientConfig` used during deserialization.
#[derive(Deserialize)]
struct RawClientConfig {
    address: String,
    auth: AuthConfig,
    #[serde(default = "default_api_timeout")]
    api_timeout_ms: u64,
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = YourlsError;

    fn try_from(raw: RawClientConfig) -> YourlsResult<Self> {
        Ok(Self {
            address: normalize_address(&raw.address)?,
            auth: raw.auth,
            api_timeout_ms: raw.api_timeout_ms,
        })
    }
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

impl ClientConfig {
    /// Validate the address and build a configuration with the default
    /// timeout.
    ///
    /// The address must parse as an absolute URL with an explicit scheme. A
    /// trailing slash is appended when missing so endpoint derivation is
    /// uniform.
    pub fn new(address: &str, auth: AuthConfig) -> YourlsResult<Self> {
        let address = normalize_address(address)?;
        Ok(Self {
            address,
            auth,
            api_timeout_ms: constants::DEFAULT_API_TIMEOUT_MS,
        })
    }

    /// Override the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.api_timeout_ms = timeout_ms;
        self
    }

    /// Full URL of the `yourls-api.php` entry point.
    pub fn api_endpoint(&self) -> String {
        format!("{}{}", self.address, constants::API_SCRIPT)
    }

    /// Fixed parameters sent with every request: output format plus the
    /// auth fields.
    pub fn global_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("format", constants::OUTPUT_FORMAT.to_string())];
        fields.extend(self.auth.form_fields());
        fields
    }
}

/// Reject empty or schemeless addresses and append a trailing slash.
fn normalize_address(address: &str) -> YourlsResult<String> {
    if address.is_empty() {
        return Err(YourlsError::Param("API URL".into()));
    }

    let parsed = Url::parse(address).map_err(|_| YourlsError::Param("addr".into()))?;
    // "localhost:1234" parses with "localhost" as the scheme; such URLs are
    // non-hierarchical and unusable as a base.
    if parsed.cannot_be_a_base() {
        return Err(YourlsError::Param("addr".into()));
    }

    let mut address = address.to_string();
    if !address.ends_with('/') {
        address.push('/');
    }
    Ok(address)
}
