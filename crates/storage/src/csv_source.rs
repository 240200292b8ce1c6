use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use quiz_core::model::QuestionRecord;

use crate::repository::{RecordSource, StorageError};

/// Reads quiz rows from a headerless two-column CSV file.
#[derive(Clone, Debug)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse records from any reader.
    ///
    /// Quoted fields may contain commas and newlines. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FieldCount` for a row without exactly two fields and
    /// `StorageError::Csv` for malformed CSV.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<QuestionRecord>, StorageError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.len() != 2 {
                return Err(StorageError::FieldCount {
                    line: row.position().map_or(0, csv::Position::line),
                    found: row.len(),
                });
            }
            records.push(row.deserialize::<QuestionRecord>(None)?);
        }
        Ok(records)
    }
}

impl RecordSource for CsvRecordSource {
    fn load(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        let data = std::fs::read(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let records = Self::from_reader(data.as_slice())?;
        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let records =
            CsvRecordSource::from_reader("2+2?,4\nCapital of France?,Paris\n".as_bytes())
                .unwrap();
        assert_eq!(
            records,
            vec![
                QuestionRecord::new("2+2?", "4"),
                QuestionRecord::new("Capital of France?", "Paris"),
            ]
        );
    }

    #[test]
    fn keeps_whitespace_in_fields() {
        let records = CsvRecordSource::from_reader("a question , an answer ".as_bytes()).unwrap();
        assert_eq!(records[0].question(), "a question ");
        assert_eq!(records[0].answer_key(), " an answer ");
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let records = CsvRecordSource::from_reader("\"5,3 summed?\",8\n".as_bytes()).unwrap();
        assert_eq!(records[0].question(), "5,3 summed?");
        assert_eq!(records[0].answer_key(), "8");
    }

    #[test]
    fn rejects_three_fields() {
        let err = CsvRecordSource::from_reader("1+1?,2\n2+2?,4,extra\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StorageError::FieldCount { line: 2, found: 3 }));
    }

    #[test]
    fn rejects_single_field() {
        let err = CsvRecordSource::from_reader("lonely\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StorageError::FieldCount { line: 1, found: 1 }));
    }

    #[test]
    fn empty_input_has_no_records() {
        let records = CsvRecordSource::from_reader("".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_format_error() {
        let err = CsvRecordSource::from_reader(&b"q,\xff\xfe\n"[..]).unwrap_err();
        assert!(err.is_format_error());
    }
}
