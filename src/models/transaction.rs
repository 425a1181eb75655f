//! A recorded HTTP transaction.
//!
//! A transaction pairs a request with its outcome: a response when the
//! exchange completed, or a transport error when it failed before one was
//! received. Transactions are immutable once constructed; the store never
//! alters them.

use super::request::HttpRequest;
use super::response::HttpResponse;
use serde_json::{Map, Value};
use std::fmt;

/// One completed (or failed) HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransaction {
    /// The request the client sent. Always present.
    pub request: HttpRequest,

    /// The response received, if the exchange produced one.
    pub response: Option<HttpResponse>,

    /// Opaque description of a transport-level failure.
    ///
    /// A finalized failed exchange has no response and this set; the
    /// history does not interpret the value.
    pub error: Option<Value>,

    /// Opaque per-call metadata supplied by the client, not interpreted
    /// by the history.
    pub options: Map<String, Value>,
}

impl HttpTransaction {
    /// Record key for the request field at the validation boundary.
    pub const KEY_REQUEST: &'static str = "request";
    /// Record key for the response field at the validation boundary.
    pub const KEY_RESPONSE: &'static str = "response";
    /// Record key for the error field at the validation boundary.
    pub const KEY_ERROR: &'static str = "error";
    /// Record key for the options field at the validation boundary.
    pub const KEY_OPTIONS: &'static str = "options";

    /// Creates a transaction from already-validated parts.
    pub fn new(
        request: HttpRequest,
        response: Option<HttpResponse>,
        error: Option<Value>,
        options: Map<String, Value>,
    ) -> Self {
        Self {
            request,
            response,
            error,
            options,
        }
    }

    /// Creates a successful transaction with no error or options.
    pub fn from_exchange(request: HttpRequest, response: HttpResponse) -> Self {
        Self::new(request, Some(response), None, Map::new())
    }

    /// Validates an untyped record into a transaction.
    ///
    /// This is the boundary adapter between loosely-typed client callback
    /// data and the strongly-typed history. Only `request` and `response`
    /// are structurally validated; `error` and `options` pass through
    /// opaquely.
    ///
    /// # Arguments
    ///
    /// * `record` - A map with string keys representing a prospective
    ///   transaction
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::MissingRequest`] when the `request`
    /// field is absent or not request-shaped, and
    /// [`TransactionError::InvalidResponse`] when a present `response`
    /// field is neither null nor response-shaped.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self, TransactionError> {
        let request = match record.get(Self::KEY_REQUEST) {
            Some(value) => serde_json::from_value::<HttpRequest>(value.clone())
                .map_err(|_| TransactionError::MissingRequest)?,
            None => return Err(TransactionError::MissingRequest),
        };

        let response = match record.get(Self::KEY_RESPONSE) {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value::<HttpResponse>(value.clone())
                    .map_err(|_| TransactionError::InvalidResponse)?,
            ),
        };

        let error = record
            .get(Self::KEY_ERROR)
            .filter(|value| !value.is_null())
            .cloned();

        let options = record
            .get(Self::KEY_OPTIONS)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Ok(Self::new(request, response, error, options))
    }
}

/// Errors produced by the transaction validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionError {
    /// The `request` field is absent or not request-shaped.
    MissingRequest,

    /// The `response` field is present but neither null nor response-shaped.
    InvalidResponse,
}

impl fmt::Display for TransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionError::MissingRequest => {
                write!(f, "record['request'] must be a request")
            }
            TransactionError::InvalidResponse => {
                write!(f, "record['response'] must be null or a response")
            }
        }
    }
}

impl std::error::Error for TransactionError {}
