//! End-to-end ingestion of raw logs into tables

mod common;

use approx::assert_relative_eq;
use common::{leading_time_log, DECORATED_LOG};
use cputemp_core::{Core, Error, ParserConfig, SensorTable, TimeSource};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_decorated_log_builds_table() {
    let table = SensorTable::from_reader(Cursor::new(DECORATED_LOG), &ParserConfig::default())
        .unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.times(), &[0, 30, 60, 90]);
    assert_eq!(table.column(Core::Core0), &[61.0, 80.0, 62.0, 83.0]);
    assert_eq!(table.column(Core::Core2), &[50.0, 82.0, 51.0, 84.0]);
    assert_eq!(table.time_span(), (0, 90));
}

#[test]
fn test_custom_step() {
    let config = ParserConfig::default().with_step(5);
    let table = SensorTable::from_reader(Cursor::new(DECORATED_LOG), &config).unwrap();
    assert_eq!(table.times(), &[0, 5, 10, 15]);
}

#[test]
fn test_leading_time_keeps_unsorted_order() {
    let log = leading_time_log(&[
        (20, [1.5, 2.0, 3.0, 4.0]),
        (0, [5.0, 6.0, 7.0, 8.0]),
        (10, [9.0, 10.0, 11.0, 12.25]),
    ]);
    let config = ParserConfig::default().with_time_source(TimeSource::Leading);
    let table = SensorTable::from_reader(Cursor::new(log), &config).unwrap();

    assert_eq!(table.times(), &[20, 0, 10]);
    assert_relative_eq!(table.column(Core::Core0)[0], 1.5);
    assert_relative_eq!(table.column(Core::Core3)[2], 12.25);
}

#[test]
fn test_short_record_reports_its_line() {
    let log = "1 2 3 4\n5 6 7 8\n9 10 11\n";
    let err = SensorTable::from_reader(Cursor::new(log), &ParserConfig::default()).unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_from_path_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DECORATED_LOG.as_bytes()).unwrap();
    file.flush().unwrap();

    let table = SensorTable::from_path(file.path(), &ParserConfig::default()).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.column(Core::Core3), &[58.0, 83.0, 59.0, 81.0]);
}

#[test]
fn test_decorated_garbage_fails_the_whole_table() {
    let log = "+61.0°C +63.0°C +50.0°C +58.0°C\n+80.0°C N/A +82.0°C +83.0°C\n";
    let err = SensorTable::from_reader(Cursor::new(log), &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}
