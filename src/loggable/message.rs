//! Lenient rendering and parsing of message parts of a logged record.
//!
//! Parsing here is total: these functions never fail, because the replay
//! path is best-effort by contract. Missing or wrongly-typed fields fall
//! back to empty-string, empty-headers, or zero defaults; losing a field
//! is preferable to losing the whole record.

use crate::models::{Headers, HttpRequest, HttpResponse};
use serde_json::{json, Value};

/// Record key for a request method.
pub const KEY_METHOD: &str = "method";
/// Record key for a request URI.
pub const KEY_URI: &str = "uri";
/// Record key for a response status code.
pub const KEY_STATUS_CODE: &str = "status_code";
/// Record key for message headers.
pub const KEY_HEADERS: &str = "headers";
/// Record key for a message body.
pub const KEY_BODY: &str = "body";

/// Renders a request to its logged form.
pub fn request_to_value(request: &HttpRequest) -> Value {
    json!({
        KEY_METHOD: request.method,
        KEY_URI: request.uri,
        KEY_HEADERS: request.headers,
        KEY_BODY: request.body,
    })
}

/// Renders an optional response to its logged form.
///
/// An absent response renders as an empty object.
pub fn response_to_value(response: Option<&HttpResponse>) -> Value {
    match response {
        Some(response) => json!({
            KEY_STATUS_CODE: response.status_code,
            KEY_HEADERS: response.headers,
            KEY_BODY: response.body,
        }),
        None => json!({}),
    }
}

/// Reconstructs a request from logged data, defaulting missing fields.
pub fn request_from_value(value: &Value) -> HttpRequest {
    let mut request = HttpRequest::new(
        string_field(value, KEY_METHOD),
        string_field(value, KEY_URI),
    );
    request.headers = headers_field(value);
    request.body = string_field(value, KEY_BODY);
    request
}

/// Reconstructs an optional response from logged data.
///
/// An empty object (or anything that is not an object) is the logged form
/// of an absent response and maps back to `None`; any other object yields
/// a response with missing fields defaulted.
pub fn response_from_value(value: &Value) -> Option<HttpResponse> {
    let object = value.as_object()?;
    if object.is_empty() {
        return None;
    }

    let mut response = HttpResponse::new(status_code_field(value));
    response.headers = headers_field(value);
    response.body = string_field(value, KEY_BODY);
    Some(response)
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn status_code_field(value: &Value) -> u16 {
    value
        .get(KEY_STATUS_CODE)
        .and_then(Value::as_u64)
        .and_then(|status_code| u16::try_from(status_code).ok())
        .unwrap_or(0)
}

fn headers_field(value: &Value) -> Headers {
    match value.get(KEY_HEADERS) {
        Some(headers) => Headers::extract(headers),
        None => Headers::new(),
    }
}
