use std::io::Write;

use quiz_core::model::QuestionRecord;
use storage::{CsvRecordSource, RecordSource, StorageError};
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file.flush().expect("flush csv");
    file
}

#[test]
fn loads_file_in_order_and_reloads_identically() {
    let file = write_csv("5+5,10\n1+1,2\n8+3,11\n");
    let source = CsvRecordSource::new(file.path());

    let first = source.load().expect("load");
    assert_eq!(
        first,
        vec![
            QuestionRecord::new("5+5", "10"),
            QuestionRecord::new("1+1", "2"),
            QuestionRecord::new("8+3", "11"),
        ]
    );

    let second = source.load().expect("reload");
    assert_eq!(first, second);
}

#[test]
fn handles_crlf_line_endings() {
    let file = write_csv("2+2?,4\r\nCapital of France?,Paris\r\n");
    let records = CsvRecordSource::new(file.path()).load().expect("load");
    assert_eq!(records[1].answer_key(), "Paris");
}

#[test]
fn malformed_row_fails_whole_load() {
    let file = write_csv("2+2?,4\nbad,row,here\n3+3?,6\n");
    let err = CsvRecordSource::new(file.path()).load().unwrap_err();
    assert!(err.is_format_error());
    assert!(matches!(err, StorageError::FieldCount { line: 2, found: 3 }));
}

#[test]
fn missing_file_is_a_file_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("problems.csv");
    let err = CsvRecordSource::new(&path).load().unwrap_err();
    assert!(err.is_file_error());
    assert!(err.to_string().contains("problems.csv"));
}
