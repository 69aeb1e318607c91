//! Report generation module
//!
//! Renders the report for a results directory and writes it to disk.

mod html;

pub use html::HtmlReporter;

use crate::error::ReportError;
use crate::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::Path;
use tracing::debug;

/// Everything a report renders
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Results directory as given on the command line, never read
    pub results_dir: String,
    /// Wall-clock time the report was generated
    pub generated_at: DateTime<Local>,
}

impl ReportContext {
    pub fn new(results_dir: impl Into<String>) -> Self {
        Self {
            results_dir: results_dir.into(),
            generated_at: Local::now(),
        }
    }

    /// Default date-time rendering, e.g. `2024-05-01 13:45:02.123456`.
    /// Whole seconds drop the fraction: `2024-05-01 13:45:02`.
    pub fn timestamp(&self) -> String {
        if self.generated_at.timestamp_subsec_micros() == 0 {
            self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            self.generated_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
        }
    }
}

/// Trait for report generators
pub trait Reporter {
    fn generate(ctx: &ReportContext) -> Result<String>;
}

/// Render and write the report for `format`. Formats without a renderer write nothing.
pub fn write_report(format: OutputFormat, output: &Path, ctx: &ReportContext) -> Result<()> {
    let report = match format {
        OutputFormat::Html => HtmlReporter::generate(ctx)?,
        OutputFormat::Json => {
            debug!("no renderer for json output, skipping write");
            return Ok(());
        }
    };

    std::fs::write(output, &report).map_err(|source| ReportError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(path = %output.display(), bytes = report.len(), "report written");

    Ok(())
}
