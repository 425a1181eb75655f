//! Line-delimited JSON persistence for logged transaction records.
//!
//! One record per line, in the shape produced by
//! [`LoggableTransaction::to_json`]. Loading is best-effort: a missing
//! file reads as an empty archive and malformed lines parse to defaulted
//! records rather than aborting the load.

use super::transaction::LoggableTransaction;
use crate::history::TransactionStore;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Appends one record to the archive file, creating it if needed.
///
/// # Errors
///
/// Returns any underlying I/O error from opening or writing the file.
pub fn append_record(path: &Path, record: &LoggableTransaction) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", record.to_json())?;
    file.flush()
}

/// Loads all records from the archive file.
///
/// A missing file reads as an empty archive. Blank lines are skipped;
/// every other line yields a record, with malformed lines parsing to
/// defaulted records.
///
/// # Errors
///
/// Returns any underlying I/O error other than the file being absent.
pub fn load_records(path: &Path) -> io::Result<Vec<LoggableTransaction>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(LoggableTransaction::from_json(&line));
    }

    Ok(records)
}

/// Rebuilds a store by replaying the archive in order.
///
/// Each record is appended with its archived period, so the rebuilt
/// store's timing matches the recorded session rather than load time.
///
/// # Errors
///
/// Returns any underlying I/O error from reading the archive.
pub fn load_store(path: &Path) -> io::Result<TransactionStore> {
    let mut store = TransactionStore::new();
    for record in load_records(path)? {
        let period = record.period();
        store.append_with_period(record.into_transaction(), period);
    }
    Ok(store)
}
