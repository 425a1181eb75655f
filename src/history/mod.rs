//! Transaction history storage and analysis.
//!
//! This module provides the ordered transaction store with inter-arrival
//! timing, and the redirect loop detector that operates over it.
//!
//! # Example
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
//!     HttpResponse::new(301),
//! ));
//!
//! assert!(RedirectLoopDetector::new(&store).has_redirect_loop());
//! ```

pub mod periods;
pub mod redirect;
pub mod store;

pub use periods::PeriodTracker;
pub use redirect::RedirectLoopDetector;
pub use store::TransactionStore;
