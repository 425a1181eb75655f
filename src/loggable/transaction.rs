//! The loggable form of a transaction.
//!
//! Pairs a transaction with the period recorded for its acceptance and
//! renders both to the stable record shape used for logging and
//! persistence:
//!
//! ```json
//! {
//!   "request":  {"method": "...", "uri": "...", "headers": {...}, "body": "..."},
//!   "response": {"status_code": 200, "headers": {...}, "body": "..."},
//!   "period":   123
//! }
//! ```
//!
//! An absent response renders as `{}`. Parsing is the inverse and is
//! total: malformed input yields a record with defaulted fields.

use super::message;
use crate::models::HttpTransaction;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// A transaction paired with the period recorded for its acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggableTransaction {
    transaction: HttpTransaction,
    period: u64,
}

impl LoggableTransaction {
    /// Record key for the request part.
    pub const KEY_REQUEST: &'static str = "request";
    /// Record key for the response part.
    pub const KEY_RESPONSE: &'static str = "response";
    /// Record key for the period.
    pub const KEY_PERIOD: &'static str = "period";

    /// Creates a loggable transaction.
    ///
    /// # Arguments
    ///
    /// * `transaction` - The recorded transaction
    /// * `period` - The period recorded for this transaction's acceptance,
    ///   in microseconds
    pub fn new(transaction: HttpTransaction, period: u64) -> Self {
        Self {
            transaction,
            period,
        }
    }

    /// The wrapped transaction.
    pub fn transaction(&self) -> &HttpTransaction {
        &self.transaction
    }

    /// The period recorded for this transaction's acceptance.
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Unwraps into the transaction, discarding the period.
    pub fn into_transaction(self) -> HttpTransaction {
        self.transaction
    }

    /// Renders the record as a JSON value.
    pub fn to_value(&self) -> Value {
        json!({
            Self::KEY_REQUEST: message::request_to_value(&self.transaction.request),
            Self::KEY_RESPONSE: message::response_to_value(self.transaction.response.as_ref()),
            Self::KEY_PERIOD: self.period,
        })
    }

    /// Renders the record as a JSON string.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// Parses a record from a JSON string, never failing.
    ///
    /// Malformed JSON yields an empty record: an empty-method,
    /// empty-URI request, no response, and a zero period.
    pub fn from_json(json: &str) -> Self {
        let value = serde_json::from_str::<Value>(json).unwrap_or(Value::Null);
        Self::from_value(&value)
    }

    /// Parses a record from a JSON value, never failing.
    pub fn from_value(value: &Value) -> Self {
        let request =
            message::request_from_value(value.get(Self::KEY_REQUEST).unwrap_or(&Value::Null));
        let response = value
            .get(Self::KEY_RESPONSE)
            .and_then(|response| message::response_from_value(response));
        let period = value
            .get(Self::KEY_PERIOD)
            .and_then(Value::as_u64)
            .unwrap_or(0);

        Self::new(
            HttpTransaction::new(request, response, None, serde_json::Map::new()),
            period,
        )
    }
}

impl Serialize for LoggableTransaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
