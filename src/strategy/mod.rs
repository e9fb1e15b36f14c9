//! The three execution strategies.
//!
//! Same task, three scheduling disciplines, identical external contract:
//!
//! - `sequential`: one file at a time on the calling thread; the
//!   correctness and performance baseline.
//! - `concurrent`: all reads issued as futures on a single-threaded
//!   cooperative scheduler; I/O waits overlap, CPU work does not.
//! - `parallel`: a bounded thread pool; workers read and fold truly
//!   concurrently, making this the strategy with genuine race exposure.
//!
//! `Strategy` is a small closed enum rather than a trait hierarchy so the
//! harness can iterate over the variants uniformly and `clap` can parse them
//! directly.

use crate::aggregate::Aggregator;
use crate::config::Config;
use crate::core_types::RunReport;
use crate::errors::Result;
use crate::progress::ProgressReporter;
use crate::shutdown::CancellationToken;
use crate::workspace::Workspace;
use log::info;
use std::fmt;
use std::time::Instant;

mod concurrent;
mod parallel;
mod sequential;

/// One of the three interchangeable execution disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Blocking reads in workspace order on the calling thread.
    Sequential,
    /// Suspension-based reads on a single-threaded cooperative scheduler.
    Concurrent,
    /// Blocking reads dispatched across a bounded worker-thread pool.
    Parallel,
}

impl Strategy {
    /// Every strategy, in the canonical report order.
    pub const ALL: [Strategy; 3] = [
        Strategy::Sequential,
        Strategy::Concurrent,
        Strategy::Parallel,
    ];

    /// Stable lowercase name, used in reports and log tags.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Concurrent => "concurrent",
            Strategy::Parallel => "parallel",
        }
    }

    /// Processes every workspace file under this strategy's scheduling
    /// discipline, folding results into `aggregator`, and reports wall-clock
    /// elapsed time for the whole run.
    ///
    /// All strategies produce numerically identical totals for the same
    /// workspace; their only legitimate difference is elapsed time and
    /// scheduling. The aggregator snapshot is taken only after the driver
    /// returns, i.e. after the run's join barrier.
    ///
    /// # Errors
    /// Returns `Error::Strategy` if the scheduler itself cannot be
    /// constructed, and `Error::Interrupted` on cancellation. Per-file read
    /// failures never surface here; they are folded into the totals.
    pub fn run(
        &self,
        workspace: &Workspace,
        aggregator: &Aggregator,
        config: &Config,
        token: &CancellationToken,
        progress: &dyn ProgressReporter,
    ) -> Result<RunReport> {
        info!("Running {} strategy over {} files", self.name(), workspace.len());
        progress.strategy_started(self.name(), workspace.len() as u64);
        let started = Instant::now();

        match self {
            Strategy::Sequential => sequential::run(workspace, aggregator, token, progress)?,
            Strategy::Concurrent => concurrent::run(workspace, aggregator, token, progress)?,
            Strategy::Parallel => {
                parallel::run(workspace, aggregator, config.execution.workers, token, progress)?
            }
        }

        let elapsed = started.elapsed();
        progress.strategy_finished(self.name());
        Ok(RunReport {
            strategy: self.name(),
            elapsed,
            totals: aggregator.snapshot(),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_report_order() {
        let names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["sequential", "concurrent", "parallel"]);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Strategy::Concurrent.to_string(), "concurrent");
    }
}
