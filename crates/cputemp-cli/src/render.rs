//! Text and JSON rendering of column fits

use clap::ValueEnum;
use cputemp_core::{Core, ParserConfig};
use cputemp_fit::{
    ColumnFit, ColumnFitterProperties, LeastSquares, PiecewiseLinear, RegressionCoefficients,
    Segment,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width lines, one per segment plus the least-squares line
    Text,
    /// One JSON document per column
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

fn line(x_start: i64, x_end: i64, y_intercept: f64, slope: f64, kind: &str) -> String {
    format!("{x_start:6} <= x <= {x_end:6} ; y = {y_intercept:12.4} + {slope:12.4} x ; {kind}")
}

pub fn segment_line(segment: &Segment) -> String {
    line(
        segment.x_start,
        segment.x_end,
        segment.y_intercept,
        segment.slope,
        PiecewiseLinear::new().algorithm_name(),
    )
}

pub fn least_squares_line(fit: &ColumnFit) -> String {
    let (start, end) = fit.span();
    line(
        start,
        end,
        fit.least_squares.y_intercept,
        fit.least_squares.slope,
        LeastSquares::new().algorithm_name(),
    )
}

/// Every segment line followed by the least-squares line
pub fn text_lines(fit: &ColumnFit) -> Vec<String> {
    fit.segments
        .iter()
        .map(segment_line)
        .chain(std::iter::once(least_squares_line(fit)))
        .collect()
}

#[derive(Serialize)]
struct ColumnReport<'a> {
    core: Core,
    span: [i64; 2],
    segments: &'a [Segment],
    least_squares: RegressionCoefficients,
    parser: ParserConfig,
}

/// Pretty JSON report, echoing the parser settings the column was read with
pub fn json_document(fit: &ColumnFit, parser: &ParserConfig) -> serde_json::Result<String> {
    let (start, end) = fit.span();
    serde_json::to_string_pretty(&ColumnReport {
        core: fit.core,
        span: [start, end],
        segments: &fit.segments,
        least_squares: fit.least_squares,
        parser: *parser,
    })
}

/// Full artifact contents for one column
pub fn render(
    fit: &ColumnFit,
    parser: &ParserConfig,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = text_lines(fit).join("\n");
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = json_document(fit, parser)?;
            out.push('\n');
            Ok(out)
        }
    }
}
