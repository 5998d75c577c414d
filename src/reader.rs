//! Streaming record iterator over a sales transaction file.
//!
//! Reads one row at a time instead of loading the whole file into memory,
//! so files larger than available memory can be consumed. The iterator owns
//! the file handle and releases it on drop, on every exit path.

use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of comma-separated fields expected on every data row.
pub const FIELD_COUNT: usize = 7;

/// A lazy, forward-only iterator of [`Transaction`]s read from a CSV source.
///
/// The first line of the source is treated as a header and discarded
/// unconditionally; its content is ignored. Each subsequent line is split on
/// commas (quoting disabled, a comma always splits), checked for exactly
/// seven fields and turned into one record.
///
/// Iteration yields `Result<Transaction>`: `None` signals normal exhaustion
/// at end of stream, while `Some(Err(_))` signals a malformed row or read
/// failure. An error is fatal for the iteration: every subsequent call
/// returns `None`. The sequence is single-pass; restarting requires
/// re-opening the source.
pub struct SalesReader<R: Read> {
    records: StringRecordsIntoIter<R>,

    /// 1-based row number of the most recently read row. The header is row 1.
    row: usize,

    /// Set after yielding an error; the iterator is fused from then on.
    done: bool,
}

impl SalesReader<BufReader<File>> {
    /// Opens the sales file at `path` for streaming.
    ///
    /// Fails with [`LedgerError::Io`] if the path is missing or unreadable.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("opened sales file {}", path.display());
        Ok(SalesReader::from_reader(BufReader::new(file)))
    }
}

impl<R: Read> SalesReader<R> {
    /// Creates a streaming reader over any `io::Read` source.
    pub fn from_reader(reader: R) -> Self {
        let csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        SalesReader {
            records: csv_reader.into_records(),
            row: 1,
            done: false,
        }
    }

    /// Turns one raw row into a [`Transaction`].
    ///
    /// The field-count check is explicit and independent of the header's
    /// arity; the typed construction is then delegated to positional serde
    /// deserialization.
    fn parse_record(&self, record: &StringRecord) -> Result<Transaction> {
        if record.len() != FIELD_COUNT {
            return Err(LedgerError::FieldCount {
                row: self.row,
                found: record.len(),
            });
        }

        record.deserialize(None).map_err(|e| LedgerError::InvalidRecord {
            row: self.row,
            message: e.to_string(),
        })
    }
}

impl<R: Read> Iterator for SalesReader<R> {
    type Item = Result<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };

        // The csv reader silently drops blank lines, but the format treats
        // them as malformed one-token rows. A record starting later than the
        // next expected file line means a blank line was skipped.
        if let Some(pos) = record.position() {
            let expected = self.row as u64 + 1;
            if pos.line() > expected {
                self.done = true;
                return Some(Err(LedgerError::FieldCount {
                    row: expected as usize,
                    found: 1,
                }));
            }
        }

        self.row += 1;
        let result = self.parse_record(&record);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}
