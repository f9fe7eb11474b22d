//! Rendering a report for the terminal or for tools.

use std::io::{self, Write};

use clap::ValueEnum;
use owo_colors::OwoColorize;
use seass_project::LintReport;

/// How findings are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per finding on stderr, then a summary.
    Text,
    /// A JSON array on stdout.
    Json,
}

/// Write one line per finding followed by the summary line.
pub fn write_text<W: Write>(out: &mut W, report: &LintReport, color: bool) -> io::Result<()> {
    for diagnostic in &report.diagnostics {
        if color {
            writeln!(
                out,
                "{} - {}",
                diagnostic.span.dimmed(),
                diagnostic.message.red()
            )?;
        } else {
            writeln!(out, "{diagnostic}")?;
        }
    }
    writeln!(out, "{}", summary(report))
}

/// Write the findings as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, report: &LintReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &report.diagnostics)?;
    writeln!(out)?;
    Ok(())
}

fn summary(report: &LintReport) -> String {
    let problems = report.diagnostics.len();
    format!(
        "{problems} {} in {} {}",
        plural(problems, "problem"),
        report.files,
        plural(report.files, "file")
    )
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_owned()
    } else {
        format!("{noun}s")
    }
}
