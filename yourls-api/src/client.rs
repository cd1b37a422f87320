//! HTTP client for the YOURLS API.
//!
//! Wraps reqwest::Client with the fixed global parameters, the timeout from
//! the configuration, and the construction-time credential probe. Every
//! action flows through `call`: build the form body, POST it to the single
//! `yourls-api.php` endpoint, hand status and body back to the action.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use yourls_core::config::ClientConfig;
use yourls_core::constants;
use yourls_core::error::{YourlsError, YourlsResult};

use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Client for one YOURLS installation.
///
/// Holds the immutable configuration and a reusable HTTP connection pool.
/// Safe to reuse sequentially; callers needing concurrency should use one
/// instance per task or serialize access externally. No retries: a failed
/// request surfaces immediately.
#[derive(Debug, Clone)]
pub struct YourlsClient {
    inner: Client,
    config: ClientConfig,
    endpoint: String,
}

impl YourlsClient {
    /// Build the client and verify the credentials with one probe request.
    ///
    /// The probe posts only the global parameters. The server answers 403
    /// when the credentials are rejected; any other HTTP status leaves
    /// construction successful. Transport and timeout failures from the
    /// probe still propagate.
    pub async fn connect(config: ClientConfig) -> YourlsResult<Self> {
        let inner = Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .build()
            .map_err(|e| YourlsError::Transport(format!("failed to build HTTP client: {e}")))?;

        let endpoint = config.api_endpoint();
        let client = Self {
            inner,
            config,
            endpoint,
        };

        debug!("probing credentials against {}", client.endpoint);
        let response = client.post_form(&client.config.global_fields()).await?;
        if response.status() == StatusCode::FORBIDDEN {
            return Err(YourlsError::AuthFailed {
                status: 403,
                message: "credentials are invalid or incorrect: forbidden".into(),
            });
        }

        Ok(client)
    }

    /// The derived API endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_form(&self, body: &[(&'static str, String)]) -> YourlsResult<reqwest::Response> {
        self.inner
            .post(&self.endpoint)
            .form(&body)
            .send()
            .await
            .map_err(classify_error)
    }

    /// Execute one API action, returning the raw HTTP status and body text.
    pub(crate) async fn call(&self, request: ApiRequest) -> YourlsResult<(u16, String)> {
        debug!("POST {} action={}", self.endpoint, request.action());
        let body = request.form_body(&self.config);
        let response = self.post_form(&body).await?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(classify_error)?;
        Ok((status, text))
    }

    /// Execute an action and decode the JSON envelope.
    ///
    /// A body that does not parse as JSON is reported as an HTTP-level
    /// failure carrying the real status code and the endpoint.
    pub(crate) async fn call_json(&self, request: ApiRequest) -> YourlsResult<ApiResponse> {
        let (status, text) = self.call(request).await?;
        ApiResponse::from_str(&text).map_err(|_| self.http_error(status))
    }

    pub(crate) fn http_error(&self, status: u16) -> YourlsError {
        YourlsError::Http {
            status,
            endpoint: self.endpoint.clone(),
        }
    }
}

/// Classify a reqwest error into a YourlsError variant.
fn classify_error(e: reqwest::Error) -> YourlsError {
    if e.is_timeout() {
        YourlsError::Timeout(e.to_string())
    } else if e.is_connect() {
        YourlsError::Transport(format!("connection failed: {e}"))
    } else {
        YourlsError::Transport(e.to_string())
    }
}
