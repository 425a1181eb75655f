//! A transaction store that emits a log record per accepted transaction.
//!
//! Wraps a [`TransactionStore`] and, after every successful append, emits
//! exactly one serialized record through the `log` facade at debug level.
//! Each record carries the period recorded for that specific append, so
//! records stay correct even when appends from concurrent completions
//! land in settlement order.

use super::transaction::LoggableTransaction;
use crate::history::TransactionStore;
use crate::models::{HttpTransaction, TransactionError};
use serde_json::{Map, Value};

/// A [`TransactionStore`] wrapper with a logging side effect on append.
#[derive(Debug, Clone, Default)]
pub struct LoggableStore {
    store: TransactionStore,
}

impl LoggableStore {
    /// Creates an empty loggable store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction, then emits its record.
    pub fn append(&mut self, transaction: HttpTransaction) {
        self.store.append(transaction);
        self.emit_last();
    }

    /// Appends a transaction with an upstream-computed period, then emits
    /// its record.
    pub fn append_with_period(&mut self, transaction: HttpTransaction, period: u64) {
        self.store.append_with_period(transaction, period);
        self.emit_last();
    }

    /// Validates and appends an untyped record, then emits its record.
    ///
    /// # Errors
    ///
    /// Returns the validation error without appending or emitting anything
    /// when the record is not transaction-shaped.
    pub fn append_record(&mut self, record: &Map<String, Value>) -> Result<(), TransactionError> {
        self.store.append_record(record)?;
        self.emit_last();
        Ok(())
    }

    /// Read access to the wrapped store.
    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Unwraps into the underlying store.
    pub fn into_store(self) -> TransactionStore {
        self.store
    }

    fn emit_last(&self) {
        // The just-appended transaction sits at the insertion index of the
        // period that was recorded for it.
        let Some(&period) = self.store.periods().periods().last() else {
            return;
        };
        let index = self.store.periods().len() - 1;

        if let Some(transaction) = self.store.get(index) {
            let record = LoggableTransaction::new(transaction.clone(), period);
            log::debug!("{}", record.to_json());
        }
    }
}
