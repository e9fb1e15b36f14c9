//! Renders the comparison report.
//!
//! One human-readable table (the default) and one JSON rendering for
//! machine consumption, both written to any `std::io::Write`. Strategies
//! appear in the order they ran; a failed strategy gets a clearly labeled
//! FAILED line instead of silently vanishing from the report.

use crate::config::{Config, OutputDestination};
use crate::constants::{SUMMARY_SEPARATOR, WORDS_PER_LINE};
use crate::core_types::RunTotals;
use crate::errors::{io_error_with_path, Result};
use crate::harness::StrategyOutcome;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Creates the report writer for the configured destination.
///
/// # Errors
/// Returns `Error::Io` if the output file cannot be created.
pub fn setup_writer(config: &Config) -> Result<Box<dyn Write>> {
    match &config.report.destination {
        OutputDestination::Stdout => Ok(Box::new(io::stdout())),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Writes the full comparison report in the configured format.
pub fn write_report(
    writer: &mut dyn Write,
    outcomes: &[StrategyOutcome],
    config: &Config,
) -> io::Result<()> {
    if config.report.json {
        write_json(writer, outcomes)
    } else {
        write_table(writer, outcomes, config)
    }
}

fn write_table(
    writer: &mut dyn Write,
    outcomes: &[StrategyOutcome],
    config: &Config,
) -> io::Result<()> {
    let expected_lines = config.workspace.file_count * config.workspace.lines_per_file;
    writeln!(writer, "{}", SUMMARY_SEPARATOR)?;
    writeln!(
        writer,
        "Strategy comparison: {} files x {} lines ({} lines, {} words expected)",
        config.workspace.file_count,
        config.workspace.lines_per_file,
        expected_lines,
        expected_lines * WORDS_PER_LINE
    )?;

    for outcome in outcomes {
        match &outcome.result {
            Ok(report) => writeln!(
                writer,
                "{:<12} elapsed: {:>10.2} ms  lines: {:>9}  words: {:>9}  processed: {}  errors: {}",
                report.strategy,
                report.elapsed.as_secs_f64() * 1000.0,
                report.totals.total_lines,
                report.totals.total_words,
                report.totals.processed_count,
                report.totals.error_count
            )?,
            Err(e) => writeln!(writer, "{:<12} FAILED: {}", outcome.strategy.name(), e)?,
        }
    }

    writeln!(writer, "{}", SUMMARY_SEPARATOR)?;
    if let Some(footer) = comparison_footer(outcomes) {
        writeln!(writer, "{}", footer)?;
    }
    Ok(())
}

/// Builds the "fastest strategy" footer, with a speedup figure relative to
/// the sequential baseline when it is available.
fn comparison_footer(outcomes: &[StrategyOutcome]) -> Option<String> {
    let reports: Vec<_> = outcomes.iter().filter_map(|o| o.report()).collect();
    let fastest = reports.iter().min_by_key(|r| r.elapsed)?;
    if reports.len() < 2 {
        return None;
    }

    let baseline = reports.iter().find(|r| r.strategy == "sequential");
    match baseline {
        Some(seq) if seq.strategy != fastest.strategy && !fastest.elapsed.is_zero() => {
            Some(format!(
                "fastest: {} ({:.2}x vs sequential)",
                fastest.strategy,
                seq.elapsed.as_secs_f64() / fastest.elapsed.as_secs_f64()
            ))
        }
        _ => Some(format!("fastest: {}", fastest.strategy)),
    }
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    strategy: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    totals: Option<&'a RunTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn write_json(writer: &mut dyn Write, outcomes: &[StrategyOutcome]) -> io::Result<()> {
    let entries: Vec<JsonOutcome<'_>> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(report) => JsonOutcome {
                strategy: report.strategy,
                ok: true,
                elapsed_ms: Some(report.elapsed.as_secs_f64() * 1000.0),
                totals: Some(&report.totals),
                error: None,
            },
            Err(e) => JsonOutcome {
                strategy: outcome.strategy.name(),
                ok: false,
                elapsed_ms: None,
                totals: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &entries).map_err(io::Error::other)?;
    writeln!(writer)
}
