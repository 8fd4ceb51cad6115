//! Benchmark records and the report table
//!
//! `go test -bench` reports one line per measured case:
//!
//! ```text
//! BenchmarkSet/8_threads/shuffled_array/LazySync/insert-8      721397      1653 ns/op
//! ```
//!
//! [`BenchLine`] is that line split into its four fields; [`BenchCase`] is
//! the normalized record with the description decomposed into its semantic
//! dimensions. Both are immutable value objects validated at construction.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::units::{Nanos, SUPPORTED_UNIT};

/// One raw line of benchmark output, split into its four
/// whitespace-separated fields but not otherwise interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchLine {
    /// Structured benchmark name,
    /// `name/threads_suffix/data_source/set_kind/scenario[-tail]`.
    pub description: String,
    /// Number of repetitions behind the measurement.
    pub iterations: u64,
    /// Measured magnitude in the reported unit.
    pub value: f64,
    /// Unit tag; only `"ns/op"` is supported.
    pub unit: String,
}

impl FromStr for BenchLine {
    type Err = Error;

    /// Parse one line of benchmark output.
    ///
    /// Leading/trailing whitespace is insignificant and fields may be
    /// separated by arbitrary whitespace runs. The checks run in order:
    /// field count, iteration count, magnitude, unit.
    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(Error::MalformedLine {
                line: line.to_string(),
            });
        }

        let iterations = tokens[1].parse::<u64>().map_err(|_| Error::InvalidNumber {
            field: "iteration count",
            value: tokens[1].to_string(),
        })?;

        let value = tokens[2].parse::<f64>().map_err(|_| Error::InvalidNumber {
            field: "duration magnitude",
            value: tokens[2].to_string(),
        })?;

        let unit = tokens[3];
        if unit != SUPPORTED_UNIT {
            return Err(Error::UnsupportedUnit {
                unit: unit.to_string(),
            });
        }

        Ok(Self {
            description: tokens[0].to_string(),
            iterations,
            value,
            unit: unit.to_string(),
        })
    }
}

/// A normalized, analysis-ready benchmark case.
///
/// Derived 1:1 from a [`BenchLine`] by decomposing its description into the
/// four semantic dimensions and converting the measurement into a canonical
/// duration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchCase {
    /// Number of worker threads the case ran with.
    pub threads: u32,
    /// Input data generator label.
    pub data_source: String,
    /// Implementation variant under test.
    pub set_kind: String,
    /// Measured operation or workload, CPU-core annotation stripped.
    pub scenario: String,
    /// Time per operation.
    pub duration: Nanos,
}

impl BenchCase {
    /// Normalize a parsed benchmark line.
    ///
    /// The description must decompose into exactly 5 `/`-segments: the
    /// harness benchmark name (unused), then threads, data source, set kind
    /// and scenario. The unit is revalidated here; the normalizer does not
    /// assume a line parser ran in front of it.
    pub fn from_line(line: &BenchLine) -> Result<Self> {
        let segments: Vec<&str> = line.description.split('/').collect();
        if segments.len() != 5 {
            return Err(Error::MalformedDescription {
                description: line.description.clone(),
            });
        }

        // The harness encodes an annotation after the thread count
        // ("8_threads"); only the numeric prefix is meaningful.
        let prefix = match segments[1].split_once('_') {
            Some((prefix, _)) => prefix,
            None => segments[1],
        };
        let threads = prefix.parse::<u32>().map_err(|_| Error::InvalidNumber {
            field: "thread count",
            value: segments[1].to_string(),
        })?;

        Ok(Self {
            threads,
            data_source: segments[2].to_string(),
            set_kind: segments[3].to_string(),
            scenario: strip_cpu_suffix(segments[4]).to_string(),
            duration: Nanos::from_reported(line.value, &line.unit)?,
        })
    }
}

/// Strip the `-<cores>` annotation the harness appends to the innermost
/// benchmark name (`insert-4` → `insert`). Everything from the first `-`
/// onward is dropped, so stripping twice equals stripping once.
fn strip_cpu_suffix(scenario: &str) -> &str {
    match scenario.split_once('-') {
        Some((stem, _)) => stem,
        None => scenario,
    }
}

/// The ordered table of all benchmark cases from one report.
///
/// Rows keep input order; the reporting side regroups them by scenario and
/// data source, so the order carries no further meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchTable {
    pub cases: Vec<BenchCase>,
}

impl BenchTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate over the rows in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchCase> {
        self.cases.iter()
    }
}

const HEADERS: [&str; 5] = ["threads", "data_source", "set_kind", "scenario", "duration"];
/// Numeric columns read better right-aligned.
const RIGHT_ALIGNED: [bool; 5] = [true, false, false, false, true];

impl fmt::Display for BenchTable {
    /// Whitespace-aligned text table, one row per case.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 5]> = self
            .cases
            .iter()
            .map(|case| {
                [
                    case.threads.to_string(),
                    case.data_source.clone(),
                    case.set_kind.clone(),
                    case.scenario.clone(),
                    case.duration.to_string(),
                ]
            })
            .collect();

        let mut widths: [usize; 5] = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let format_row = |cells: [&str; 5]| -> String {
            let row = cells
                .iter()
                .zip(widths.iter().zip(RIGHT_ALIGNED))
                .map(|(cell, (&width, right))| {
                    if right {
                        format!("{cell:>width$}")
                    } else {
                        format!("{cell:<width$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            row.trim_end().to_string()
        };

        let header = format_row(HEADERS);
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "=".repeat(header.len()))?;

        for row in &rows {
            let cells = [
                row[0].as_str(),
                row[1].as_str(),
                row[2].as_str(),
                row[3].as_str(),
                row[4].as_str(),
            ];
            writeln!(f, "{}", format_row(cells))?;
        }

        Ok(())
    }
}
