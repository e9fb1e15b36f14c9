//! `readbench` is a library and command-line tool for benchmarking one
//! file-processing workload under three execution strategies: sequential
//! blocking reads, suspension-based concurrent reads on a single-threaded
//! scheduler, and blocking reads across a bounded worker-thread pool.
//!
//! The pipeline has three stages:
//! 1.  **Build**: generate a deterministic workspace of input files whose
//!     line and word totals are known in advance.
//! 2.  **Run**: process every file under each strategy, folding per-file
//!     results into a mutation-safe aggregator and appending one line per
//!     file to a shared log.
//! 3.  **Report**: compare wall-clock elapsed time per strategy. All
//!     strategies must produce identical totals; only scheduling and elapsed
//!     time may differ.
//!
//! # Example: Library Usage
//!
//! ```
//! use readbench::{compare, ConfigBuilder};
//! use readbench::progress::NoOpProgress;
//! use readbench::shutdown::CancellationToken;
//! use tempfile::tempdir;
//!
//! // 1. Point a small workload at a temporary directory.
//! let temp_dir = tempdir().unwrap();
//! let config = ConfigBuilder::new()
//!     .root(temp_dir.path())
//!     .file_count(3)
//!     .lines_per_file(100)
//!     .workers(2)
//!     .build()
//!     .unwrap();
//!
//! // 2. Run the comparison.
//! let token = CancellationToken::new();
//! let outcomes = compare(&config, &token, &NoOpProgress).unwrap();
//!
//! // 3. Every strategy processed the same workload, so totals agree.
//! assert_eq!(outcomes.len(), 3);
//! let reports: Vec<_> = outcomes.iter().filter_map(|o| o.report()).collect();
//! assert!(reports.windows(2).all(|w| w[0].totals == w[1].totals));
//! assert_eq!(reports[0].totals.total_lines, 300);
//! ```

// Make modules public if they contain public types used in the API
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod harness;
pub mod processor;
pub mod progress;
pub mod report;
pub mod shutdown;
pub mod strategy;
pub mod workspace;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::{FileHandle, ProcessResult, RunReport, RunTotals};
pub use harness::{compare, StrategyOutcome};
pub use strategy::Strategy;
pub use workspace::Workspace;

use crate::errors::{io_error_with_path, Result};
use crate::progress::{NoOpProgress, ProgressReporter};
use crate::shutdown::CancellationToken;
use std::io::Write;
use std::sync::Arc;

/// Overall outcome of a comparison run, reflected in the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every strategy completed and every file was read successfully.
    Clean,
    /// The comparison finished, but a strategy failed or some files errored.
    Partial,
}

/// Derives the overall status from the collected outcomes.
pub fn run_status(outcomes: &[StrategyOutcome]) -> RunStatus {
    let clean = outcomes.iter().all(|outcome| {
        outcome
            .report()
            .is_some_and(|report| report.totals.error_count == 0)
    });
    if clean {
        RunStatus::Clean
    } else {
        RunStatus::Partial
    }
}

/// Executes the complete pipeline: build the workspace, run every configured
/// strategy, and write the comparison report to the configured destination.
///
/// This is the primary entry point for running the tool programmatically in
/// a way that mirrors command-line execution. For more granular control, use
/// [`compare`] directly, as shown in the crate-level example.
///
/// # Errors
/// Propagates workspace/log I/O failures and cancellation; individual
/// strategy failures are reported, not raised.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<RunStatus> {
    let progress_ref: &dyn ProgressReporter = progress.as_deref().unwrap_or(&NoOpProgress);
    let outcomes = compare(config, token, progress_ref)?;

    let mut writer = report::setup_writer(config)?;
    report::write_report(&mut *writer, &outcomes, config)
        .and_then(|()| writer.flush())
        .map_err(|e| match &config.report.destination {
            OutputDestination::File(path) => io_error_with_path(e, path),
            OutputDestination::Stdout => io_error_with_path(e, "<stdout>"),
        })?;

    Ok(run_status(&outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_report_file_and_returns_clean() -> Result<()> {
        let temp_dir = tempdir().unwrap();
        let report_path = temp_dir.path().join("report.txt");

        let mut config = Config::new_for_test(temp_dir.path().join("data"));
        config.report.destination = OutputDestination::File(report_path.clone());

        let status = run(&config, &CancellationToken::new(), None)?;

        assert_eq!(status, RunStatus::Clean);
        let rendered = fs::read_to_string(&report_path).unwrap();
        assert!(rendered.contains("sequential"));
        assert!(rendered.contains("concurrent"));
        assert!(rendered.contains("parallel"));
        Ok(())
    }

    #[test]
    fn test_run_status_partial_when_files_errored() {
        use crate::core_types::{RunReport, RunTotals};
        use std::time::Duration;

        let outcome = StrategyOutcome {
            strategy: Strategy::Sequential,
            result: Ok(RunReport {
                strategy: "sequential",
                elapsed: Duration::from_millis(1),
                totals: RunTotals {
                    total_lines: 10,
                    total_words: 80,
                    processed_count: 2,
                    error_count: 1,
                },
            }),
        };
        assert_eq!(run_status(&[outcome]), RunStatus::Partial);
    }

    #[test]
    fn test_run_status_partial_when_strategy_failed() {
        let outcome = StrategyOutcome {
            strategy: Strategy::Parallel,
            result: Err(errors::Error::Strategy {
                strategy: "parallel",
                reason: "no threads".to_string(),
            }),
        };
        assert_eq!(run_status(&[outcome]), RunStatus::Partial);
    }
}
