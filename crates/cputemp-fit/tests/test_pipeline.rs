//! Raw log through parsing and fitting of every core

use approx::assert_relative_eq;
use cputemp_core::{Core, Error, ParserConfig, SensorTable};
use cputemp_fit::fit_table;
use std::io::Cursor;

#[test]
fn test_log_to_fits() {
    let log = "\
+61.0°C +63.0°C +50.0°C +58.0°C
+80.0°C +81.0°C +82.0°C +83.0°C
+62.0°C +64.0°C +51.0°C +59.0°C
";
    let table = SensorTable::from_reader(Cursor::new(log), &ParserConfig::default()).unwrap();
    let fits = fit_table(&table);
    assert_eq!(fits.len(), 4);

    let (core, fit) = &fits[0];
    let fit = fit.as_ref().unwrap();
    assert_eq!(*core, Core::Core0);
    assert_eq!(fit.span(), (0, 60));
    assert_relative_eq!(fit.segments[1].slope, -0.6, epsilon = 1e-12);
    assert_relative_eq!(fit.least_squares.slope, 1.0 / 60.0, epsilon = 1e-12);
    assert_relative_eq!(fit.least_squares.y_intercept, 67.1666666666, epsilon = 1e-6);
}

#[test]
fn test_parse_errors_reach_the_caller() {
    let err = SensorTable::from_reader(Cursor::new("1 2\n"), &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 1, .. }));
}
