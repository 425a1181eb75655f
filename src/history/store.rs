//! Ordered, append-validated transaction storage.
//!
//! The store accumulates transactions in settlement order and owns the
//! [`PeriodTracker`] that times the gap between acceptances. Removal
//! leaves a gap rather than shifting later indices, so an index handed out
//! earlier keeps referring to the same exchange.

use super::periods::PeriodTracker;
use crate::models::{HttpRequest, HttpResponse, HttpTransaction, TransactionError};
use serde_json::{Map, Value};

/// An ordered sequence of recorded HTTP transactions.
///
/// Transactions are appended in settlement order (whichever exchange
/// completes first is appended first) and never reordered afterwards. The
/// store itself is synchronous and single-threaded; callers appending from
/// concurrent completion callbacks must serialize access, e.g. by wrapping
/// the store in a `Mutex`, so that the two-step mutation (slot push plus
/// period recording) stays atomic with respect to other appends.
///
/// Projections such as [`requests`](Self::requests) are snapshots taken at
/// call time; they do not update as the store changes.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    slots: Vec<Option<HttpTransaction>>,
    periods: PeriodTracker,
}

impl TransactionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction and records a live period for it.
    ///
    /// Always succeeds: the transaction is already validated by
    /// construction. The store length and the period sequence length each
    /// grow by one.
    pub fn append(&mut self, transaction: HttpTransaction) {
        self.slots.push(Some(transaction));
        self.periods.record_arrival();
    }

    /// Appends a transaction whose period was computed upstream.
    ///
    /// Used when replaying logged transactions that carry their own
    /// timing; the supplied period is recorded verbatim.
    pub fn append_with_period(&mut self, transaction: HttpTransaction, period: u64) {
        self.slots.push(Some(transaction));
        self.periods.record_external(period);
    }

    /// Validates an untyped record and appends the resulting transaction.
    ///
    /// # Errors
    ///
    /// Returns the validation error without touching the store when the
    /// record is not transaction-shaped; the store's invariants guarantee
    /// nothing invalid is ever stored.
    pub fn append_record(&mut self, record: &Map<String, Value>) -> Result<(), TransactionError> {
        let transaction = HttpTransaction::from_record(record)?;
        self.append(transaction);
        Ok(())
    }

    /// Returns the transaction at `offset`, if one is present.
    ///
    /// Offsets beyond the current length and offsets whose transaction was
    /// removed both yield `None`; probing for presence is a routine
    /// operation, not an error.
    pub fn get(&self, offset: usize) -> Option<&HttpTransaction> {
        self.slots.get(offset).and_then(Option::as_ref)
    }

    /// Removes the transaction at `offset`, leaving a gap.
    ///
    /// Later indices are not shifted and the period sequence is not
    /// touched: periods are indexed by insertion order, not by current
    /// slot occupancy. Removing an absent offset is a no-op.
    pub fn remove(&mut self, offset: usize) {
        if let Some(slot) = self.slots.get_mut(offset) {
            *slot = None;
        }
    }

    /// Current non-removed transactions, in original relative order.
    pub fn transactions(&self) -> Vec<&HttpTransaction> {
        self.slots.iter().flatten().collect()
    }

    /// The requests of all current transactions, in order.
    pub fn requests(&self) -> Vec<&HttpRequest> {
        self.slots
            .iter()
            .flatten()
            .map(|transaction| &transaction.request)
            .collect()
    }

    /// The response of each current transaction, in order.
    ///
    /// A transaction that failed before receiving a response contributes
    /// `None`, keeping the sequence positionally aligned with
    /// [`requests`](Self::requests).
    pub fn responses(&self) -> Vec<Option<&HttpResponse>> {
        self.slots
            .iter()
            .flatten()
            .map(|transaction| transaction.response.as_ref())
            .collect()
    }

    /// The request URIs of all current transactions, in order.
    pub fn request_urls(&self) -> Vec<&str> {
        self.slots
            .iter()
            .flatten()
            .map(|transaction| transaction.request.uri.as_str())
            .collect()
    }

    /// The most recently appended request still present, if any.
    pub fn last_request(&self) -> Option<&HttpRequest> {
        self.slots
            .iter()
            .rev()
            .flatten()
            .map(|transaction| &transaction.request)
            .next()
    }

    /// The most recent present response, if any.
    pub fn last_response(&self) -> Option<&HttpResponse> {
        self.slots
            .iter()
            .rev()
            .flatten()
            .find_map(|transaction| transaction.response.as_ref())
    }

    /// Copies a range of current transactions into a fresh store.
    ///
    /// A negative `offset` counts back from the end, so `-1` selects the
    /// last transaction. `length` of `None` means "to the end". The
    /// returned store is independent: the selected transactions are
    /// re-appended in order and timed freshly, so its periods do not copy
    /// the source's.
    ///
    /// # Arguments
    ///
    /// * `offset` - Start position, negative to count from the end
    /// * `length` - Maximum number of transactions to take
    pub fn slice(&self, offset: isize, length: Option<usize>) -> TransactionStore {
        let present = self.transactions();
        let len = present.len();

        let start = if offset < 0 {
            len.saturating_sub(offset.unsigned_abs())
        } else {
            (offset as usize).min(len)
        };

        let end = match length {
            Some(length) => start.saturating_add(length).min(len),
            None => len,
        };

        let mut sliced = TransactionStore::new();
        for transaction in &present[start..end] {
            sliced.append((*transaction).clone());
        }

        sliced
    }

    /// Empties the store and resets period tracking.
    ///
    /// The next append after a clear produces a fresh zero period.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.periods.clear();
    }

    /// Number of currently present (non-removed) transactions.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns true if no transactions are present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The period tracker owned by this store.
    ///
    /// Its length always equals the number of accepted transactions,
    /// including ones later removed.
    pub fn periods(&self) -> &PeriodTracker {
        &self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn transaction(method: &str, uri: &str) -> HttpTransaction {
        HttpTransaction::from_exchange(HttpRequest::new(method, uri), HttpResponse::new(200))
    }

    #[test]
    fn test_append_and_get() {
        let mut store = TransactionStore::new();
        store.append(transaction("GET", "http://example.com/0"));
        store.append(transaction("GET", "http://example.com/1"));
        store.append(transaction("GET", "http://example.com/2"));

        assert_eq!(store.len(), 3);
        for index in 0..3 {
            assert_eq!(
                store.get(index).unwrap().request.uri,
                format!("http://example.com/{}", index)
            );
        }
        assert!(store.get(3).is_none());
        assert!(store.get(usize::MAX).is_none());
    }

    #[test]
    fn test_remove_leaves_stable_indices() {
        let mut store = TransactionStore::new();
        store.append(transaction("GET", "http://example.com/0"));
        store.append(transaction("GET", "http://example.com/1"));
        store.append(transaction("GET", "http://example.com/2"));

        store.remove(1);

        assert_eq!(store.get(0).unwrap().request.uri, "http://example.com/0");
        assert!(store.get(1).is_none());
        assert_eq!(store.get(2).unwrap().request.uri, "http://example.com/2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_absent_offset_is_noop() {
        let mut store = TransactionStore::new();
        store.append(transaction("GET", "http://example.com/"));

        store.remove(5);
        assert_eq!(store.len(), 1);

        store.remove(0);
        store.remove(0);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_remove_does_not_affect_periods() {
        let mut store = TransactionStore::new();
        store.append(transaction("GET", "http://example.com/0"));
        store.append(transaction("GET", "http://example.com/1"));
        store.append(transaction("GET", "http://example.com/2"));

        store.remove(1);

        // Periods are indexed by insertion order, not slot occupancy.
        assert_eq!(store.periods().len(), 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_every_append_records_one_period() {
        let mut store = TransactionStore::new();
        for index in 0..4 {
            store.append(transaction("GET", &format!("http://example.com/{}", index)));
        }

        assert_eq!(store.periods().len(), 4);
        assert_eq!(store.periods().periods()[0], 0);
    }

    #[test]
    fn test_append_with_period_records_verbatim() {
        let mut store = TransactionStore::new();
        store.append_with_period(transaction("GET", "http://example.com/0"), 0);
        store.append_with_period(transaction("GET", "http://example.com/1"), 10);
        store.append_with_period(transaction("GET", "http://example.com/2"), 200);

        assert_eq!(store.periods().periods(), &[0, 10, 200]);
    }

    #[test]
    fn test_append_record_rejects_invalid() {
        let mut store = TransactionStore::new();
        let record = serde_json::json!({"response": null})
            .as_object()
            .unwrap()
            .clone();

        assert_eq!(
            store.append_record(&record),
            Err(TransactionError::MissingRequest)
        );
        assert!(store.is_empty());
        assert!(store.periods().is_empty());
    }

    #[test]
    fn test_projections_are_positionally_aligned() {
        let mut store = TransactionStore::new();
        store.append(transaction("GET", "http://example.com/0"));
        store.append(HttpTransaction::new(
            HttpRequest::new("GET", "http://example.com/1"),
            None,
            Some(serde_json::json!("connection refused")),
            serde_json::Map::new(),
        ));

        let requests = store.requests();
        let responses = store.responses();

        assert_eq!(requests.len(), 2);
        assert_eq!(responses.len(), 2);
        assert!(responses[0].is_some());
        assert!(responses[1].is_none());
        assert_eq!(
            store.request_urls(),
            vec!["http://example.com/0", "http://example.com/1"]
        );
    }

    #[test]
    fn test_last_request_and_response() {
        let mut store = TransactionStore::new();
        assert!(store.last_request().is_none());
        assert!(store.last_response().is_none());

        store.append(transaction("GET", "http://example.com/0"));
        store.append(HttpTransaction::new(
            HttpRequest::new("GET", "http://example.com/1"),
            None,
            None,
            serde_json::Map::new(),
        ));

        // Last request comes from the final transaction; last response
        // skips the failed exchange.
        assert_eq!(store.last_request().unwrap().uri, "http://example.com/1");
        assert_eq!(store.last_response().unwrap().status_code, 200);
    }

    #[test]
    fn test_slice_negative_offset() {
        let mut store = TransactionStore::new();
        store.append(transaction("GET", "http://example.com/0"));
        store.append(transaction("GET", "http://example.com/1"));
        store.append(transaction("GET", "http://example.com/2"));

        let last = store.slice(-1, None);
        assert_eq!(last.request_urls(), vec!["http://example.com/2"]);

        let last_two = store.slice(-2, None);
        assert_eq!(
            last_two.request_urls(),
            vec!["http://example.com/1", "http://example.com/2"]
        );
    }

    #[test]
    fn test_slice_positive_offset_and_length() {
        let mut store = TransactionStore::new();
        for index in 0..5 {
            store.append(transaction("GET", &format!("http://example.com/{}", index)));
        }

        let middle = store.slice(1, Some(2));
        assert_eq!(
            middle.request_urls(),
            vec!["http://example.com/1", "http://example.com/2"]
        );

        let clamped = store.slice(3, Some(10));
        assert_eq!(clamped.len(), 2);

        let whole_tail = store.slice(1, Some(usize::MAX));
        assert_eq!(whole_tail.len(), 4);

        let past_end = store.slice(10, None);
        assert!(past_end.is_empty());

        let before_start = store.slice(-10, Some(1));
        assert_eq!(before_start.request_urls(), vec!["http://example.com/0"]);
    }

    #[test]
    fn test_slice_is_independent_and_freshly_timed() {
        let mut store = TransactionStore::new();
        store.append_with_period(transaction("GET", "http://example.com/0"), 500);
        store.append_with_period(transaction("GET", "http://example.com/1"), 900);

        let sliced = store.slice(0, None);

        // Re-appended transactions are timed fresh, not copied.
        assert_eq!(sliced.periods().periods()[0], 0);
        assert_ne!(sliced.periods().periods(), store.periods().periods());
        assert_eq!(sliced.len(), 2);
    }

    #[test]
    fn test_clear_resets_store_and_timing() {
        let mut store = TransactionStore::new();
        store.append(transaction("GET", "http://example.com/0"));
        store.append(transaction("GET", "http://example.com/1"));

        store.clear();
        assert!(store.is_empty());
        assert!(store.periods().is_empty());

        store.append(transaction("GET", "http://example.com/0"));
        assert_eq!(store.periods().periods(), &[0]);
    }

    proptest! {
        #[test]
        fn prop_append_then_get_returns_each_in_order(
            uris in proptest::collection::vec("[a-z]{1,12}", 0..32)
        ) {
            let mut store = TransactionStore::new();
            for uri in &uris {
                store.append(transaction("GET", &format!("http://example.com/{}", uri)));
            }

            prop_assert_eq!(store.len(), uris.len());
            prop_assert_eq!(store.periods().len(), uris.len());

            for (index, uri) in uris.iter().enumerate() {
                let stored = store.get(index).unwrap();
                prop_assert_eq!(&stored.request.uri, &format!("http://example.com/{}", uri));
            }

            prop_assert!(store.get(uris.len()).is_none());
        }
    }
}
