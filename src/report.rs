//! Report assembly
//!
//! A report is the full text of one `go test -bench` run. The harness frames
//! the data lines with a fixed preamble (`goos:`, `goarch:`, `pkg:`, `cpu:`)
//! and summary (`PASS`, `ok ...`); assembly drops that framing positionally
//! and parses everything in between, in file order.

use std::path::Path;

use crate::data::{BenchCase, BenchLine, BenchTable};
use crate::error::{Error, Result};

/// Number of harness preamble lines before the data rows.
///
/// The framing is a positional assumption about the report format, never
/// content-sniffed: a report framed differently assembles into a wrong
/// table instead of an error.
pub const LEADING_NOISE_LINES: usize = 4;

/// Number of harness summary lines after the data rows.
pub const TRAILING_NOISE_LINES: usize = 2;

/// Assemble the benchmark table from the full text of a report.
///
/// Every line between the framing passes through the line parser and the
/// normalizer, in file order; the first failure aborts the whole parse.
/// Reports shorter than the framing produce an empty table.
pub fn parse_report(text: &str) -> Result<BenchTable> {
    let lines: Vec<&str> = text.lines().collect();
    let end = lines.len().saturating_sub(TRAILING_NOISE_LINES);
    let data = lines.get(LEADING_NOISE_LINES..end).unwrap_or(&[]);

    let mut cases = Vec::with_capacity(data.len());
    for raw in data {
        let line: BenchLine = raw.parse()?;
        cases.push(BenchCase::from_line(&line)?);
    }

    Ok(BenchTable { cases })
}

/// Read a report file and assemble its benchmark table.
pub fn parse_report_file(path: &Path) -> Result<BenchTable> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_report(&text)
}
