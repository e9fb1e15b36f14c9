//! Orchestrates one full comparison run.
//!
//! The workspace is built once and reused read-only by every strategy; each
//! strategy run gets a fresh aggregator over the one shared log, so runs stay
//! isolated from each other and elapsed-time comparisons are meaningful.

use crate::aggregate::{Aggregator, SharedLog};
use crate::config::Config;
use crate::core_types::RunReport;
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::ProgressReporter;
use crate::shutdown::CancellationToken;
use crate::strategy::Strategy;
use crate::workspace::Workspace;
use log::{debug, error};
use std::sync::Arc;

/// Result of one strategy's attempt within a comparison: either its report
/// or the strategy-fatal error that kept it from producing one.
#[derive(Debug)]
pub struct StrategyOutcome {
    /// The strategy this outcome belongs to.
    pub strategy: Strategy,
    /// The run's report, or the scheduler failure that aborted it.
    pub result: Result<RunReport>,
}

impl StrategyOutcome {
    /// The report, if the strategy completed.
    pub fn report(&self) -> Option<&RunReport> {
        self.result.as_ref().ok()
    }
}

/// Runs every configured strategy back-to-back over one freshly built
/// workspace and collects an outcome per strategy.
///
/// Individual strategy failures are captured in their outcome rather than
/// aborting the comparison; only workspace construction failure (and
/// cancellation) is fatal to the whole run.
///
/// # Errors
/// Returns `Error::Io` if the workspace or shared log cannot be created and
/// `Error::Interrupted` when the token trips mid-comparison.
pub fn compare(
    config: &Config,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<Vec<StrategyOutcome>> {
    let workspace = Workspace::build(&config.workspace)?;
    let log = Arc::new(SharedLog::open(
        &config.log_path(),
        config.report.accumulate_log,
    )?);
    debug!(
        "Expected totals per run: {:?}",
        workspace.expected_totals()
    );

    let mut outcomes = Vec::with_capacity(config.execution.strategies.len());
    for strategy in &config.execution.strategies {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let aggregator = Aggregator::new(strategy.name(), log.clone());
        let result = strategy.run(&workspace, &aggregator, config, token, progress);
        log.flush()
            .map_err(|e| io_error_with_path(e, log.path()))?;

        match result {
            Err(Error::Interrupted) => return Err(Error::Interrupted),
            Err(e) => {
                error!("{} strategy failed: {}", strategy.name(), e);
                outcomes.push(StrategyOutcome {
                    strategy: *strategy,
                    result: Err(e),
                });
            }
            Ok(report) => {
                debug!(
                    "{} strategy finished in {:?}: {:?}",
                    strategy.name(),
                    report.elapsed,
                    report.totals
                );
                outcomes.push(StrategyOutcome {
                    strategy: *strategy,
                    result: Ok(report),
                });
            }
        }
    }

    Ok(outcomes)
}
