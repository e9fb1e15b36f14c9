//! Defines core data structures used throughout the benchmark pipeline.
//!
//! These structs are central to how work units are described
//! (`FileHandle`), how per-file outcomes are carried (`ProcessResult`), and
//! how a whole strategy run is summarized (`RunTotals`, `RunReport`).

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Identifies one unit of work: a generated input file.
///
/// Handles are created once by [`crate::workspace::Workspace::build`] and are
/// immutable for the remainder of the process lifetime. Strategies only ever
/// receive shared references to them.
#[derive(Debug, Clone)]
pub struct FileHandle {
    /// Stable identifier, also used in log lines (e.g. `input-03`).
    pub id: String,
    /// Absolute or workspace-relative path of the backing file.
    pub path: PathBuf,
    /// Line count the file was generated with, used as a test oracle.
    pub expected_lines: usize,
}

/// Output of processing a single [`FileHandle`]. Immutable after creation.
///
/// A failed read is represented by `error: Some(..)` with zero counts rather
/// than by an `Err` return, so that one unreadable file cannot abort a whole
/// strategy run.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// Identifier of the processed file.
    pub file_id: String,
    /// Number of lines, as delimited by the platform line-break convention.
    pub line_count: usize,
    /// Number of maximal runs of non-whitespace characters.
    pub word_count: usize,
    /// Wall-clock duration of the single read, in microseconds.
    pub elapsed_micros: u128,
    /// Cause of a failed read, if the file was missing or unreadable.
    pub error: Option<String>,
}

impl ProcessResult {
    /// Builds a successful result from counted content.
    pub fn ok(file_id: String, line_count: usize, word_count: usize, elapsed: Duration) -> Self {
        Self {
            file_id,
            line_count,
            word_count,
            elapsed_micros: elapsed.as_micros(),
            error: None,
        }
    }

    /// Builds a failed result carrying the read error's cause.
    pub fn failed(file_id: String, cause: String, elapsed: Duration) -> Self {
        Self {
            file_id,
            line_count: 0,
            word_count: 0,
            elapsed_micros: elapsed.as_micros(),
            error: Some(cause),
        }
    }

    /// Whether the read succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregated totals of one strategy run.
///
/// Exactly one instance exists per run, owned by that run's
/// [`crate::aggregate::Aggregator`]. After a run completes, `total_lines`
/// equals the sum of `line_count` over the run's successful results and
/// `processed_count` equals the number of files in the workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    /// Sum of line counts over all successfully read files.
    pub total_lines: usize,
    /// Sum of word counts over all successfully read files.
    pub total_words: usize,
    /// Number of files processed, whether or not the read succeeded.
    pub processed_count: usize,
    /// Number of files whose read failed.
    pub error_count: usize,
}

impl RunTotals {
    /// Folds one per-file result into the totals.
    ///
    /// Errored results are excluded from the line/word sums but still count
    /// toward `processed_count`.
    pub fn record(&mut self, result: &ProcessResult) {
        self.processed_count += 1;
        if result.is_ok() {
            self.total_lines += result.line_count;
            self.total_words += result.word_count;
        } else {
            self.error_count += 1;
        }
    }
}

/// Summary of one completed strategy run. Immutable; its lifecycle ends when
/// the harness prints or serializes the comparison.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Name of the strategy that produced the report.
    pub strategy: &'static str,
    /// Wall-clock time the whole run took.
    pub elapsed: Duration,
    /// Totals folded by the run's aggregator.
    pub totals: RunTotals,
}
