//! Form-body construction for API requests.
//!
//! YOURLS takes every argument, the action selector included, as an
//! `application/x-www-form-urlencoded` field. The fixed global fields from
//! the configuration are merged with the per-action fields and sorted by
//! name so the encoded body is deterministic.

use yourls_core::config::ClientConfig;

/// One API action plus its specific form fields.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    action: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Start a request for the given action.
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, name: &'static str, value: &str) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    /// Add a field only when a value is present.
    pub fn optional_field(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.fields.push((name, value.to_string()));
        }
        self
    }

    /// The action selector this request carries.
    pub fn action(&self) -> &'static str {
        self.action
    }

    /// Merge the configuration's global fields with this request's fields
    /// into the final form body, ordered by field name. Action fields never
    /// collide with global ones, so duplicates cannot occur.
    pub fn form_body(&self, config: &ClientConfig) -> Vec<(&'static str, String)> {
        let mut body = config.global_fields();
        body.push(("action", self.action.to_string()));
        body.extend(self.fields.iter().cloned());
        body.sort_by(|a, b| a.0.cmp(b.0));
        body
    }
}
