use std::path::PathBuf;

use quiz_core::model::QuestionRecord;
use thiserror::Error;

/// Errors surfaced by record sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid line {line} in csv file: each line must contain 2 fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("reading csv: {0}")]
    Csv(#[from] csv::Error),
}

impl StorageError {
    /// The data file could not be opened or read.
    #[must_use]
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// The data file was readable but its rows are malformed.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::FieldCount { .. } | Self::Csv(_))
    }
}

/// Source of quiz questions.
///
/// Loads are all-or-nothing: a malformed row fails the whole load.
pub trait RecordSource {
    /// Load every record, in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or a row is malformed.
    fn load(&self) -> Result<Vec<QuestionRecord>, StorageError>;
}

/// Simple in-memory source for testing and prototyping.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRecordSource {
    records: Vec<QuestionRecord>,
}

impl InMemoryRecordSource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemoryRecordSource {
    fn load(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Ok(self.records.clone())
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn load(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        (**self).load()
    }
}
