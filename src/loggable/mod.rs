//! Logging and persistence surface of the history container.
//!
//! Everything here works with a stable JSON record shape: a `request`
//! part, a `response` part (an empty object when the exchange never
//! completed), and the `period` recorded for the transaction's
//! acceptance. [`LoggableStore`] emits one such record per append through
//! the `log` facade, and [`archive`] persists the same records as
//! line-delimited JSON.

pub mod archive;
pub mod message;
pub mod store;
pub mod transaction;

pub use store::LoggableStore;
pub use transaction::LoggableTransaction;
