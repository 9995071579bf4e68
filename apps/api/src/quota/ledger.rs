//! Quota ledger: the append-only record of past searches.
//!
//! One line per search: `timestamp\tkeyword\tlocation`. Daily usage is the number
//! of lines whose timestamp starts with the UTC date.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ledger lock poisoned")]
    Poisoned,
}

/// A single logged search.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaRecord {
    pub timestamp: DateTime<Utc>,
    pub keyword: String,
    pub location: String,
}

impl QuotaRecord {
    pub fn new(timestamp: DateTime<Utc>, keyword: &str, location: &str) -> Self {
        Self {
            timestamp,
            keyword: keyword.to_string(),
            location: location.to_string(),
        }
    }

    /// Renders the record as a ledger line, without the trailing newline.
    /// Field separators inside keyword/location are flattened to spaces.
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            flatten_field(&self.keyword),
            flatten_field(&self.location)
        )
    }
}

fn flatten_field(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

/// The `YYYY-MM-DD` prefix every ledger line for `date` starts with.
pub fn day_prefix(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn count_lines_for_day<'a>(lines: impl Iterator<Item = &'a str>, date: NaiveDate) -> usize {
    let prefix = day_prefix(date);
    lines
        .filter(|line| !line.is_empty() && line.starts_with(&prefix))
        .count()
}

/// Storage behind the daily quota. Swappable so tests never touch the filesystem.
pub trait QuotaLedger: Send + Sync {
    /// Number of searches recorded on `date` (UTC).
    fn count(&self, date: NaiveDate) -> Result<usize, LedgerError>;

    fn append(&self, record: &QuotaRecord) -> Result<(), LedgerError>;
}

/// Flat-file ledger. A missing file is an empty ledger; bytes that are not
/// valid UTF-8 are replaced rather than failing the count.
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuotaLedger for FileLedger {
    fn count(&self, date: NaiveDate) -> Result<usize, LedgerError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let contents = String::from_utf8_lossy(&bytes);
        Ok(count_lines_for_day(contents.lines(), date))
    }

    fn append(&self, record: &QuotaRecord) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;
        Ok(())
    }
}

/// In-memory ledger for tests.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryLedger {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl InMemoryLedger {
    pub fn with_records(records: &[QuotaRecord]) -> Self {
        Self {
            lines: std::sync::Mutex::new(records.iter().map(QuotaRecord::to_line).collect()),
        }
    }

    pub fn record_count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

#[cfg(test)]
impl QuotaLedger for InMemoryLedger {
    fn count(&self, date: NaiveDate) -> Result<usize, LedgerError> {
        let lines = self.lines.lock().map_err(|_| LedgerError::Poisoned)?;
        Ok(count_lines_for_day(lines.iter().map(String::as_str), date))
    }

    fn append(&self, record: &QuotaRecord) -> Result<(), LedgerError> {
        let mut lines = self.lines.lock().map_err(|_| LedgerError::Poisoned)?;
        lines.push(record.to_line());
        Ok(())
    }
}
