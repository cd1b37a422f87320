//! Link management actions: shorten, update, expand, delete.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use yourls_core::constants;
use yourls_core::error::{YourlsError, YourlsResult};

use crate::client::YourlsClient;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Optional fields for `shorten`. Included in the request only when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortenOptions {
    /// Custom alias for the short URL.
    pub keyword: Option<String>,
    /// Custom title for the link.
    pub title: Option<String>,
}

impl YourlsClient {
    /// Shorten a URL, returning the full response envelope.
    pub async fn shorten(&self, url: &str, options: &ShortenOptions) -> YourlsResult<Value> {
        if url.is_empty() {
            return Err(YourlsError::Param("url".into()));
        }

        let request = ApiRequest::new("shorturl")
            .field("url", url)
            .optional_field("keyword", options.keyword.as_deref())
            .optional_field("title", options.title.as_deref());

        let response = self.call_json(request).await?;
        self.check_status_success(&response, url)?;
        Ok(response.into_inner())
    }

    /// Point an existing short URL at a new destination, returning the full
    /// response envelope.
    ///
    /// On the wire the keyword travels as `shorturl` and the new
    /// destination as `url`; the server's parameter names are preserved
    /// exactly.
    pub async fn update(&self, shorturl: &str, destination: &str) -> YourlsResult<Value> {
        if shorturl.is_empty() {
            return Err(YourlsError::Param("shorturl".into()));
        }

        let request = ApiRequest::new("update")
            .field("shorturl", shorturl)
            .field("url", destination);

        let response = self.call_json(request).await?;
        self.check_status_success(&response, destination)?;
        Ok(response.into_inner())
    }

    /// Expand a short URL or keyword into its destination URL.
    pub async fn expand(&self, short: &str) -> YourlsResult<String> {
        if short.is_empty() {
            return Err(YourlsError::Param("shorturl".into()));
        }

        let request = ApiRequest::new("expand").field("shorturl", short);
        let response = self.call_json(request).await?;
        self.check_message_success(&response)?;

        match response.field("longurl") {
            Some(Value::String(longurl)) => Ok(longurl),
            _ => Err(YourlsError::Serialization(
                "response missing 'longurl' field".into(),
            )),
        }
    }

    /// Delete a short URL by keyword.
    ///
    /// The server gives no usable JSON body for this action; a 200 status
    /// is the whole contract, and the body is never parsed.
    pub async fn delete(&self, keyword: &str) -> YourlsResult<bool> {
        if keyword.is_empty() {
            return Err(YourlsError::Param("keyword".into()));
        }

        let request = ApiRequest::new("delete").field("shorturl", keyword);
        let (status, _body) = self.call(request).await?;
        if status == 200 {
            Ok(true)
        } else {
            Err(self.http_error(status))
        }
    }

    /// Shared failure handling for the `status`-marker actions.
    ///
    /// The duplicate-URL code gets its own error carrying the offending
    /// URL; everything else surfaces the server's message and code verbatim.
    pub(crate) fn check_status_success(
        &self,
        response: &ApiResponse,
        url: &str,
    ) -> YourlsResult<()> {
        if response.is_status_success() {
            return Ok(());
        }
        if response.code() == constants::CODE_URL_EXISTS {
            return Err(YourlsError::UrlAlreadyExists(url.to_string()));
        }
        Err(YourlsError::Api {
            message: response.message().unwrap_or_default().to_string(),
            code: response.code(),
        })
    }

    /// Shared failure handling for the `message`-marker actions.
    pub(crate) fn check_message_success(&self, response: &ApiResponse) -> YourlsResult<()> {
        if response.is_message_success() {
            return Ok(());
        }
        Err(YourlsError::Api {
            message: response.error_detail(),
            code: response.code(),
        })
    }
}
