//! HTTP request data model.
//!
//! This module defines the request half of a recorded transaction: the
//! method, target URI, headers, and body that a client sent. Instances are
//! plain values; the history never issues or modifies requests.

use super::headers::Headers;
use serde::{Deserialize, Serialize};

/// An HTTP request as observed by the history.
///
/// The method and URI are kept as strings so that records replayed from
/// logs round-trip exactly, including the empty defaults produced by the
/// lenient deserializer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method (e.g. "GET", "POST").
    pub method: String,

    /// Target URI as sent by the client.
    ///
    /// Compared as an exact string by the redirect loop detector; no
    /// normalization is applied.
    pub uri: String,

    /// Request headers in the order the client produced them.
    #[serde(default)]
    pub headers: Headers,

    /// Request body content.
    #[serde(default)]
    pub body: String,
}

impl HttpRequest {
    /// Creates a request with the given method and URI and no headers or body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `uri` - Target URI
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: Headers::new(),
            body: String::new(),
        }
    }

    /// Adds a header to the request.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.add(name, value);
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Returns true if the request has a non-empty body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let request = HttpRequest::new("GET", "http://example.com/");

        assert_eq!(request.method, "GET");
        assert_eq!(request.uri, "http://example.com/");
        assert!(request.headers.is_empty());
        assert!(!request.has_body());
    }

    #[test]
    fn test_add_header() {
        let mut request = HttpRequest::new("POST", "http://example.com/users");
        request.add_header("Content-Type", "application/json");

        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&["application/json".to_string()][..])
        );
    }

    #[test]
    fn test_set_body() {
        let mut request = HttpRequest::new("POST", "http://example.com/users");
        request.set_body(r#"{"name": "example"}"#);

        assert!(request.has_body());
        assert_eq!(request.body, r#"{"name": "example"}"#);
    }

    #[test]
    fn test_serialization() {
        let mut request = HttpRequest::new("GET", "http://example.com/");
        request.add_header("Accept", "application/json");

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: HttpRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, request);
    }
}
