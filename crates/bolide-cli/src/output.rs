//! Output formatting for the impact energy report.

use std::io::{self, Write};

use clap::ValueEnum;

use bolide_lib::ImpactReport;

/// Supported report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered plain-text report.
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Print the report as the bordered plain-text block.
pub fn render_text(report: &ImpactReport) {
    print!("{}", report.render_text());
}

/// Print the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json(report: &ImpactReport) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, report).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
