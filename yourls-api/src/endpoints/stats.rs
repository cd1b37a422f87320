//! Installation and per-link statistics actions.

use serde_json::Value;

use yourls_core::error::{YourlsError, YourlsResult};

use crate::client::YourlsClient;
use crate::request::ApiRequest;

impl YourlsClient {
    /// Overall installation statistics: the `stats` sub-object.
    ///
    /// This action sets no success marker; any parseable JSON body counts
    /// as success.
    pub async fn stats(&self) -> YourlsResult<Value> {
        let request = ApiRequest::new("stats");
        let response = self.call_json(request).await?;
        response
            .field("stats")
            .ok_or_else(|| YourlsError::Serialization("response missing 'stats' field".into()))
    }

    /// Detailed statistics for one short URL or keyword: the `link`
    /// sub-object.
    pub async fn url_stats(&self, short: &str) -> YourlsResult<Value> {
        if short.is_empty() {
            return Err(YourlsError::Param("shorturl".into()));
        }

        let request = ApiRequest::new("url-stats").field("shorturl", short);
        let response = self.call_json(request).await?;
        self.check_message_success(&response)?;
        response
            .field("link")
            .ok_or_else(|| YourlsError::Serialization("response missing 'link' field".into()))
    }
}
