//! HTTP response data model.
//!
//! The response half of a recorded transaction. A transaction that failed
//! at the transport level has no response at all, so this type is always
//! self-consistent: a present response carries a status code, headers, and
//! body.

use super::headers::Headers;
use serde::{Deserialize, Serialize};

/// An HTTP response as observed by the history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code (e.g. 200, 301, 500).
    pub status_code: u16,

    /// Response headers in the order the server produced them.
    #[serde(default)]
    pub headers: Headers,

    /// Response body content.
    #[serde(default)]
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with the given status code and no headers or body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: Headers::new(),
            body: String::new(),
        }
    }

    /// Adds a header to the response.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.add(name, value);
    }

    /// Sets the response body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Checks if the response status indicates a redirection (3xx).
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// Checks if the response status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Checks if the response status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let response = HttpResponse::new(200);

        assert_eq!(response.status_code, 200);
        assert!(response.headers.is_empty());
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_status_checks() {
        let success = HttpResponse::new(200);
        assert!(success.is_success());
        assert!(!success.is_redirect());
        assert!(!success.is_client_error());
        assert!(!success.is_server_error());

        let redirect = HttpResponse::new(301);
        assert!(redirect.is_redirect());
        assert!(!redirect.is_success());

        let client_error = HttpResponse::new(404);
        assert!(client_error.is_client_error());

        let server_error = HttpResponse::new(500);
        assert!(server_error.is_server_error());
    }

    #[test]
    fn test_set_body() {
        let mut response = HttpResponse::new(200);
        response.set_body("Hello, World!");

        assert_eq!(response.body, "Hello, World!");
    }

    #[test]
    fn test_serialization() {
        let mut response = HttpResponse::new(404);
        response.add_header("Content-Type", "text/plain");
        response.set_body("not found");

        let json = serde_json::to_string(&response).unwrap();
        let deserialized: HttpResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, response);
    }
}
