//! Rendering normalized designs.
//!
//! - CSV: the output header line, then the organized rows
//! - JSON: an array with one object per design file

use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::OutputResult;
use crate::transform::pipeline::DesignReport;

/// Output format for normalized designs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Normalized CSV: output header, then one line per sample
    #[default]
    Csv,
    /// JSON array of designs with their records
    Json,
}

/// Render one design as CSV text, newline-terminated.
pub fn render_csv(report: &DesignReport) -> String {
    let mut out = String::with_capacity(report.output_header.len() + report.table.len() + 2);
    out.push_str(&report.output_header);
    out.push('\n');
    if !report.table.is_empty() {
        out.push_str(&report.table);
        out.push('\n');
    }
    out
}

/// Render designs as a pretty-printed JSON array.
pub fn render_json(reports: &[DesignReport]) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Render designs in the given format.
pub fn render(reports: &[DesignReport], format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Csv => Ok(reports.iter().map(render_csv).collect()),
        OutputFormat::Json => {
            let mut json = render_json(reports)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write to a file, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(p) => fs::write(p, content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
