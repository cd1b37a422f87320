//! Response envelope handling.
//!
//! The YOURLS API is inconsistent about how it signals success: most
//! actions set `status`, expand and url-stats set `message`, and delete is
//! judged on the HTTP status alone. The shape of the payload also varies
//! per action, so the envelope is kept as raw JSON and interrogated per
//! action rather than forced into one struct.

use serde_json::Value;

use yourls_core::constants;

/// A decoded JSON response envelope.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    raw: Value,
}

impl ApiResponse {
    /// Decode a response body.
    pub fn from_str(body: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            raw: serde_json::from_str(body)?,
        })
    }

    /// The `status` field, when present and a string.
    pub fn status(&self) -> Option<&str> {
        self.raw.get("status").and_then(Value::as_str)
    }

    /// The `message` field, when present and a string.
    pub fn message(&self) -> Option<&str> {
        self.raw.get("message").and_then(Value::as_str)
    }

    /// The `code` field, stringified when the server sends a number.
    pub fn code(&self) -> String {
        match self.raw.get("code") {
            Some(Value::String(code)) => code.clone(),
            Some(Value::Number(code)) => code.to_string(),
            _ => String::new(),
        }
    }

    /// Whether `status` marks success (shorturl and update actions).
    pub fn is_status_success(&self) -> bool {
        self.status() == Some("success")
    }

    /// Whether `message` marks success (expand and url-stats actions).
    pub fn is_message_success(&self) -> bool {
        self.message() == Some("success")
    }

    /// Detail portion of an error message.
    ///
    /// Failed expand/url-stats messages arrive as `"error: <detail>"`.
    /// Split on the first `": "`; when the separator is absent the whole
    /// message is the detail.
    pub fn error_detail(&self) -> String {
        let message = self.message().unwrap_or_default();
        match message.split_once(constants::ERROR_DETAIL_SEPARATOR) {
            Some((_, detail)) => detail.to_string(),
            None => message.to_string(),
        }
    }

    /// A named payload field, cloned out of the envelope.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.raw.get(name).cloned()
    }

    /// The full envelope.
    pub fn into_inner(self) -> Value {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success_marker() {
        let resp = ApiResponse::from_str(r#"{"status":"success","shorturl":"http://x/y"}"#)
            .unwrap();
        assert!(resp.is_status_success());
        assert!(!resp.is_message_success());
        assert_eq!(resp.field("shorturl").unwrap(), "http://x/y");
    }

    #[test]
    fn test_message_success_marker() {
        let resp =
            ApiResponse::from_str(r#"{"message":"success","longurl":"https://example.com"}"#)
                .unwrap();
        assert!(resp.is_message_success());
        assert!(!resp.is_status_success());
    }

    #[test]
    fn test_error_detail_splits_on_first_separator() {
        let resp = ApiResponse::from_str(r#"{"message":"error: not found"}"#).unwrap();
        assert_eq!(resp.error_detail(), "not found");

        // Only the first separator counts; the rest belongs to the detail.
        let resp = ApiResponse::from_str(r#"{"message":"error: bad keyword: abc"}"#).unwrap();
        assert_eq!(resp.error_detail(), "bad keyword: abc");
    }

    #[test]
    fn test_error_detail_falls_back_to_whole_message() {
        let resp = ApiResponse::from_str(r#"{"message":"forbidden"}"#).unwrap();
        assert_eq!(resp.error_detail(), "forbidden");
    }

    #[test]
    fn test_numeric_code_is_stringified() {
        let resp = ApiResponse::from_str(r#"{"message":"error: gone","code":404}"#).unwrap();
        assert_eq!(resp.code(), "404");
    }

    #[test]
    fn test_missing_code_is_empty() {
        let resp = ApiResponse::from_str(r#"{"status":"fail"}"#).unwrap();
        assert_eq!(resp.code(), "");
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        assert!(ApiResponse::from_str("<html>oops</html>").is_err());
    }
}
