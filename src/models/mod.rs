//! Data models for recorded HTTP transactions.
//!
//! This module contains the core value types: requests, responses, the
//! ordered header multimap, and the transaction that pairs a request with
//! its outcome.

pub mod headers;
pub mod request;
pub mod response;
pub mod transaction;

pub use headers::Headers;
pub use request::HttpRequest;
pub use response::HttpResponse;
pub use transaction::{HttpTransaction, TransactionError};
