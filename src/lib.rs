//! HTTP transaction history container.
//!
//! Records completed (and failed) HTTP exchanges in arrival order,
//! tracking the inter-arrival period of each acceptance in microseconds,
//! and answers questions about the recorded session.
//!
//! # Architecture
//!
//! The crate is organized into three modules:
//!
//! - **models**: Core data structures for requests, responses, headers
//!   and transactions
//! - **history**: The ordered transaction store with period tracking,
//!   and the redirect loop detector that reads from it
//! - **loggable**: The stable JSON record shape, a store wrapper that
//!   emits one log record per append, and line-delimited JSON archiving
//!
//! # Usage
//!
//! ```
//! use http_history::history::{RedirectLoopDetector, TransactionStore};
//! use http_history::models::{HttpRequest, HttpResponse, HttpTransaction};
//!
//! let mut store = TransactionStore::new();
//! store.append(HttpTransaction::from_exchange(
//!     HttpRequest::new("GET", "http://example.com/"),
//!     HttpResponse::new(301),
//! ));
//! store.append(HttpTransaction::from_exchange(
//!     HttpRequest::new("GET", "http://example.com/"),
//!     HttpResponse::new(200),
//! ));
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.periods().periods()[0], 0);
//! assert!(!RedirectLoopDetector::new(&store).has_redirect_loop());
//! ```
//!
//! # Concurrency
//!
//! The store is a plain single-writer container. Callers recording from
//! several request tasks should wrap it in a `Mutex` and append under the
//! lock; periods then measure the settlement order the store observed.

pub mod history;
pub mod loggable;
pub mod models;

pub use history::{PeriodTracker, RedirectLoopDetector, TransactionStore};
pub use loggable::{LoggableStore, LoggableTransaction};
pub use models::{Headers, HttpRequest, HttpResponse, HttpTransaction, TransactionError};
