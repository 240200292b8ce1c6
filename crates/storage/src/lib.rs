#![forbid(unsafe_code)]

pub mod csv_source;
pub mod repository;

pub use csv_source::CsvRecordSource;
pub use repository::{InMemoryRecordSource, RecordSource, StorageError};
