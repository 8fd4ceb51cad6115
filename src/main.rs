//! bench-report CLI - Tables and charts from go benchmark reports
//!
//! Parses the textual output of `go test -bench` and either prints the
//! normalized benchmark table or renders one chart page per benchmark group.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use bench_report::{
    html::{self, ChartConfig},
    report,
};

/// bench-report: tables and charts from go benchmark reports
#[derive(Parser, Debug)]
#[command(name = "bench-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the normalized benchmark table
    Table(TableArgs),

    /// Render one HTML chart page per benchmark group
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct TableArgs {
    /// Path to the benchmark report file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Path to the benchmark report file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output directory for the chart pages
    #[arg(short, long, default_value = "reports")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Table(args) => table_command(args),
        Commands::Render(args) => render_command(args),
    }
}

/// Print the normalized benchmark table
fn table_command(args: TableArgs) -> Result<()> {
    let table = report::parse_report_file(&args.input)
        .with_context(|| format!("Failed to parse benchmark report: {:?}", args.input))?;

    info!("Parsed {} benchmark cases", table.len());

    if table.is_empty() {
        warn!("Report contains no benchmark lines");
    }

    println!("{}", table);

    Ok(())
}

/// Render one chart page per benchmark group
fn render_command(args: RenderArgs) -> Result<()> {
    let table = report::parse_report_file(&args.input)
        .with_context(|| format!("Failed to parse benchmark report: {:?}", args.input))?;

    info!("Parsed {} benchmark cases", table.len());

    if table.is_empty() {
        warn!("Report contains no benchmark lines, nothing to render");
        return Ok(());
    }

    let config = ChartConfig {
        out_dir: args.out_dir,
    };

    let paths = html::write_charts(&table, &config)
        .with_context(|| "Failed to write chart pages")?;

    for path in &paths {
        info!("Wrote {:?}", path);
    }
    info!("Rendered {} chart pages", paths.len());

    Ok(())
}
