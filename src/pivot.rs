//! Grouping and pivoting of benchmark cases
//!
//! One chart is rendered per `(scenario, data_source)` group. Within a group
//! the remaining two dimensions pivot into a matrix: threads as row labels,
//! set kinds as column labels, durations as cell values.

use std::collections::BTreeMap;
use std::fmt;

use crate::data::{BenchCase, BenchTable};
use crate::units::Nanos;

/// Key identifying one chart-worth of rows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub scenario: String,
    pub data_source: String,
}

impl GroupKey {
    /// File stem for the group's chart artifact,
    /// `<scenario>_<data_source>`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.scenario, self.data_source)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.scenario, self.data_source)
    }
}

/// Group table rows by scenario and data source.
///
/// Groups come out sorted by key; rows inside a group keep input order.
pub fn group_cases(table: &BenchTable) -> BTreeMap<GroupKey, Vec<&BenchCase>> {
    let mut groups: BTreeMap<GroupKey, Vec<&BenchCase>> = BTreeMap::new();

    for case in table.iter() {
        let key = GroupKey {
            scenario: case.scenario.clone(),
            data_source: case.data_source.clone(),
        };
        groups.entry(key).or_default().push(case);
    }

    groups
}

/// The threads × set-kind duration matrix for one group.
#[derive(Debug, Clone)]
pub struct PivotTable {
    pub key: GroupKey,
    /// Row axis, ascending.
    pub threads: Vec<u32>,
    /// Column axis, lexicographic.
    pub set_kinds: Vec<String>,
    cells: BTreeMap<u32, BTreeMap<String, Nanos>>,
}

impl PivotTable {
    /// Pivot one group of cases.
    ///
    /// Duplicate `(threads, set_kind)` pairs are a caller error and are not
    /// detected; the later row wins.
    pub fn from_cases(key: GroupKey, cases: &[&BenchCase]) -> Self {
        let mut cells: BTreeMap<u32, BTreeMap<String, Nanos>> = BTreeMap::new();
        for case in cases {
            cells
                .entry(case.threads)
                .or_default()
                .insert(case.set_kind.clone(), case.duration);
        }

        let threads: Vec<u32> = cells.keys().copied().collect();
        let mut set_kinds: Vec<String> = cells
            .values()
            .flat_map(|row| row.keys().cloned())
            .collect();
        set_kinds.sort();
        set_kinds.dedup();

        Self {
            key,
            threads,
            set_kinds,
            cells,
        }
    }

    /// Cell lookup; `None` when the group had no row for this pair.
    pub fn value(&self, threads: u32, set_kind: &str) -> Option<Nanos> {
        self.cells
            .get(&threads)
            .and_then(|row| row.get(set_kind))
            .copied()
    }

    /// One matrix row, aligned with `set_kinds`.
    pub fn row(&self, threads: u32) -> Vec<Option<Nanos>> {
        self.set_kinds
            .iter()
            .map(|kind| self.value(threads, kind))
            .collect()
    }
}

/// Pivot every group of the table, in key order.
pub fn pivot_tables(table: &BenchTable) -> Vec<PivotTable> {
    group_cases(table)
        .into_iter()
        .map(|(key, cases)| PivotTable::from_cases(key, &cases))
        .collect()
}
