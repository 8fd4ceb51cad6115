//! HTML chart pages with Chart.js
//!
//! One self-contained page per `(scenario, data_source)` group: a line chart
//! of duration against thread count with one line per set kind, and the
//! pivoted durations as a table.

use crate::data::BenchTable;
use crate::error::{Error, Result};
use crate::pivot::{pivot_tables, PivotTable};
use crate::units::Nanos;
use chrono::Utc;
use minijinja::{context, Environment};
use std::path::PathBuf;

/// HTML template for a single chart page
const CHART_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
    <style>
        :root {
            --bg-primary: #0d1117;
            --bg-secondary: #161b22;
            --bg-tertiary: #21262d;
            --text-primary: #c9d1d9;
            --text-secondary: #8b949e;
            --text-muted: #6e7681;
            --border-color: #30363d;
            --accent-blue: #58a6ff;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
            min-height: 100vh;
        }

        .container {
            max-width: 1100px;
            margin: 0 auto;
            padding: 2rem;
        }

        header {
            text-align: center;
            margin-bottom: 2rem;
            padding: 1.5rem;
            background: var(--bg-secondary);
            border-radius: 12px;
            border: 1px solid var(--border-color);
        }

        h1 {
            font-size: 1.75rem;
            font-weight: 600;
            color: var(--accent-blue);
            margin-bottom: 0.25rem;
        }

        .subtitle {
            color: var(--text-secondary);
            font-size: 1rem;
        }

        .chart-card {
            background: var(--bg-secondary);
            border: 1px solid var(--border-color);
            border-radius: 12px;
            overflow: hidden;
        }

        .chart-container {
            padding: 1.5rem;
            height: 400px;
            position: relative;
        }

        .pivot-table {
            width: 100%;
            border-collapse: collapse;
        }

        .pivot-table th,
        .pivot-table td {
            padding: 0.75rem 1.25rem;
            text-align: right;
            border-top: 1px solid var(--border-color);
            font-family: 'SF Mono', 'Fira Code', monospace;
            font-size: 0.9rem;
        }

        .pivot-table th {
            background: var(--bg-tertiary);
            color: var(--text-secondary);
            font-weight: 500;
            font-size: 0.85rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
        }

        .pivot-table tr:hover {
            background: var(--bg-tertiary);
        }

        footer {
            text-align: center;
            padding: 1.5rem;
            color: var(--text-muted);
            font-size: 0.9rem;
        }

        @media (max-width: 768px) {
            .container {
                padding: 1rem;
            }

            .chart-container {
                height: 300px;
            }

            .pivot-table th,
            .pivot-table td {
                padding: 0.5rem;
            }
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Scenario: {{ scenario }}</h1>
            <p class="subtitle">Data source: {{ data_source }}</p>
        </header>

        <div class="chart-card">
            <div class="chart-container">
                <canvas id="chart"></canvas>
            </div>

            <table class="pivot-table">
                <thead>
                    <tr>
                        <th>threads</th>
                        {% for kind in set_kinds %}
                        <th>{{ kind }}</th>
                        {% endfor %}
                    </tr>
                </thead>
                <tbody>
                    {% for row in rows %}
                    <tr>
                        <td>{{ row.threads }}</td>
                        {% for cell in row.cells %}
                        <td>{{ cell }}</td>
                        {% endfor %}
                    </tr>
                    {% endfor %}
                </tbody>
            </table>
        </div>

        <footer>
            <p>Generated: {{ generated_at }}</p>
        </footer>
    </div>

    <script>
        const chartData = {{ chart_data_json | safe }};

        // Color palette for the set-kind lines
        const colors = [
            '#58a6ff', '#3fb950', '#f85149', '#a371f7', '#d29922',
            '#79c0ff', '#56d364', '#ff7b72', '#bc8cff', '#e3b341'
        ];

        new Chart(document.getElementById('chart'), {
            type: 'line',
            data: {
                labels: chartData.threads,
                datasets: chartData.datasets.map((dataset, index) => ({
                    label: dataset.label,
                    data: dataset.data,
                    borderColor: colors[index % colors.length],
                    backgroundColor: colors[index % colors.length] + '20',
                    fill: false,
                    tension: 0.3,
                    pointRadius: 4,
                    pointHoverRadius: 6
                }))
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                interaction: {
                    mode: 'index',
                    intersect: false
                },
                plugins: {
                    legend: {
                        position: 'top',
                        labels: {
                            color: '#c9d1d9',
                            usePointStyle: true,
                            padding: 20
                        }
                    },
                    tooltip: {
                        backgroundColor: '#21262d',
                        titleColor: '#c9d1d9',
                        bodyColor: '#8b949e',
                        borderColor: '#30363d',
                        borderWidth: 1
                    }
                },
                scales: {
                    x: {
                        grid: {
                            color: '#30363d'
                        },
                        ticks: {
                            color: '#8b949e'
                        },
                        title: {
                            display: true,
                            text: 'threads',
                            color: '#8b949e'
                        }
                    },
                    y: {
                        beginAtZero: false,
                        grid: {
                            color: '#30363d'
                        },
                        ticks: {
                            color: '#8b949e'
                        },
                        title: {
                            display: true,
                            text: 'nanoseconds',
                            color: '#8b949e'
                        }
                    }
                }
            }
        });
    </script>
</body>
</html>
"#;

/// Chart export configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Directory receiving one HTML page per group
    pub out_dir: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("reports"),
        }
    }
}

/// Chart payload embedded into the page for Chart.js
#[derive(Debug, Clone, serde::Serialize)]
struct ChartData {
    threads: Vec<u32>,
    datasets: Vec<Dataset>,
}

/// One chart line per set kind, aligned with the threads axis
#[derive(Debug, Clone, serde::Serialize)]
struct Dataset {
    label: String,
    /// Missing cells serialize to `null`, which Chart.js draws as a gap.
    data: Vec<Option<Nanos>>,
}

/// One pivot row prepared for the template table
#[derive(Debug, Clone, serde::Serialize)]
struct TableRow {
    threads: u32,
    cells: Vec<String>,
}

/// Render the HTML page for one pivoted group
pub fn render_chart(pivot: &PivotTable) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("chart", CHART_TEMPLATE)?;

    let template = env.get_template("chart")?;

    let datasets: Vec<Dataset> = pivot
        .set_kinds
        .iter()
        .map(|kind| Dataset {
            label: kind.clone(),
            data: pivot
                .threads
                .iter()
                .map(|&threads| pivot.value(threads, kind))
                .collect(),
        })
        .collect();

    let chart_data_json = serde_json::to_string(&ChartData {
        threads: pivot.threads.clone(),
        datasets,
    })?;

    let rows: Vec<TableRow> = pivot
        .threads
        .iter()
        .map(|&threads| TableRow {
            threads,
            cells: pivot
                .row(threads)
                .iter()
                .map(|cell| match cell {
                    Some(duration) => duration.to_string(),
                    None => "-".to_string(),
                })
                .collect(),
        })
        .collect();

    let generated_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let html = template.render(context! {
        title => pivot.key.to_string(),
        scenario => &pivot.key.scenario,
        data_source => &pivot.key.data_source,
        set_kinds => &pivot.set_kinds,
        rows => rows,
        chart_data_json => chart_data_json,
        generated_at => generated_at,
    })?;

    Ok(html)
}

/// Write one chart page per group and return the written paths in group order
pub fn write_charts(table: &BenchTable, config: &ChartConfig) -> Result<Vec<PathBuf>> {
    let pivots = pivot_tables(table);

    std::fs::create_dir_all(&config.out_dir).map_err(|e| Error::FileWriteError {
        path: config.out_dir.display().to_string(),
        source: e,
    })?;

    let mut paths = Vec::with_capacity(pivots.len());
    for pivot in &pivots {
        let html = render_chart(pivot)?;
        let path = config.out_dir.join(format!("{}.html", pivot.key.file_stem()));

        std::fs::write(&path, html).map_err(|e| Error::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        paths.push(path);
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BenchCase;

    fn case(threads: u32, data_source: &str, set_kind: &str, scenario: &str, ns: f64) -> BenchCase {
        BenchCase {
            threads,
            data_source: data_source.to_string(),
            set_kind: set_kind.to_string(),
            scenario: scenario.to_string(),
            duration: Nanos::from_nanos(ns),
        }
    }

    fn sample_table() -> BenchTable {
        BenchTable {
            cases: vec![
                case(2, "ascending_array", "CoarseGrained", "insert", 1612.0),
                case(2, "ascending_array", "LazySync", "insert", 1302.0),
                case(4, "ascending_array", "CoarseGrained", "insert", 2514.0),
                case(2, "shuffled_array", "CoarseGrained", "contains", 523.7),
            ],
        }
    }

    #[test]
    fn test_render_chart() {
        let table = sample_table();
        let pivots = pivot_tables(&table);
        let insert = pivots
            .iter()
            .find(|p| p.key.scenario == "insert")
            .unwrap();

        let html = render_chart(insert).unwrap();

        assert!(html.contains("Scenario: insert"));
        assert!(html.contains("Data source: ascending_array"));
        assert!(html.contains("CoarseGrained"));
        assert!(html.contains("LazySync"));
        assert!(html.contains("1612ns"));
        assert!(html.contains("nanoseconds"));
        // LazySync was never run on 4 threads, so the payload carries a gap.
        assert!(html.contains("null"));
    }

    #[test]
    fn test_render_chart_embeds_payload() {
        let table = sample_table();
        let pivots = pivot_tables(&table);
        let insert = pivots
            .iter()
            .find(|p| p.key.scenario == "insert")
            .unwrap();

        let html = render_chart(insert).unwrap();

        assert!(html.contains(r#""threads":[2,4]"#));
        assert!(html.contains(r#""label":"CoarseGrained","data":[1612.0,2514.0]"#));
        assert!(html.contains(r#""label":"LazySync","data":[1302.0,null]"#));
    }

    #[test]
    fn test_write_charts() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ChartConfig {
            out_dir: dir.path().join("reports"),
        };

        let paths = write_charts(&sample_table(), &config).unwrap();

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            ["contains_shuffled_array.html", "insert_ascending_array.html"]
        );

        for path in &paths {
            let html = std::fs::read_to_string(path).unwrap();
            assert!(html.contains("chart.umd.min.js"));
        }
    }

    #[test]
    fn test_write_charts_empty_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ChartConfig {
            out_dir: dir.path().to_path_buf(),
        };

        let paths = write_charts(&BenchTable::default(), &config).unwrap();
        assert!(paths.is_empty());
    }
}
