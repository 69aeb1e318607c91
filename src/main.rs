//! Security Report Generator CLI
//!
//! Writes a security scan report for a directory of scan results.

mod error;
mod reporter;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, Level};

use reporter::{write_report, ReportContext};

#[derive(Parser, Debug)]
#[command(name = "security-report")]
#[command(version)]
#[command(about = "Generate security report")]
#[command(args_override_self = true, infer_long_args = true)]
struct Cli {
    /// Directory with scan results
    #[arg(long)]
    results_dir: String,

    /// Output file
    #[arg(long, default_value = "security-report.html")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Report theme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    debug!(?cli, "parsed arguments");
    debug!(theme = ?cli.theme, "theme has no effect on the report");

    println!("Generating {} report from {}", cli.format, cli.results_dir);
    println!("Output: {}", cli.output.display());

    let ctx = ReportContext::new(cli.results_dir);
    write_report(cli.format, &cli.output, &ctx)?;

    println!("Report generated: {}", cli.output.display());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
