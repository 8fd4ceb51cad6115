//! bench-report - Benchmark report parsing and chart rendering
//!
//! This library parses the textual report produced by `go test -bench`,
//! normalizes each benchmark description into a structured case, and renders
//! one Chart.js HTML page per benchmark group.
//!
//! # Features
//!
//! - Parse `go test -bench` output into structured benchmark records
//! - Normalize descriptions into thread count, data source, set kind and scenario
//! - Pivot durations by thread count and set kind within each group
//! - Render an HTML chart page per `(scenario, data_source)` group
//!
//! # Example
//!
//! ```no_run
//! use bench_report::html::{write_charts, ChartConfig};
//! use bench_report::report;
//!
//! // Parse a benchmark report
//! let text = std::fs::read_to_string("bench_output.txt").unwrap();
//! let table = report::parse_report(&text).unwrap();
//! println!("{}", table);
//!
//! // Render one chart page per group
//! let paths = write_charts(&table, &ChartConfig::default()).unwrap();
//! println!("wrote {} chart pages", paths.len());
//! ```

pub mod data;
pub mod error;
pub mod html;
pub mod pivot;
pub mod report;
pub mod units;

pub use error::{Error, Result};
