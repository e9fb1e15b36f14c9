//! Parallel driver: bounded thread-pool scheduling.
//!
//! Reads are dispatched across a rayon pool of `workers` threads; each worker
//! independently folds its result into the shared aggregator, so this is the
//! strategy with genuine data-race exposure. `par_iter().for_each` returning
//! is the run's barrier.

use crate::aggregate::Aggregator;
use crate::errors::{Error, Result};
use crate::processor::process_file;
use crate::progress::ProgressReporter;
use crate::shutdown::CancellationToken;
use crate::workspace::Workspace;
use rayon::prelude::*;

pub(super) fn run(
    workspace: &Workspace,
    aggregator: &Aggregator,
    workers: usize,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("readbench-worker-{}", i))
        .build()
        .map_err(|e| Error::Strategy {
            strategy: "parallel",
            reason: e.to_string(),
        })?;

    pool.install(|| {
        workspace.handles().par_iter().for_each(|handle| {
            if token.is_cancelled() {
                return;
            }
            let result = process_file(handle);
            let tag = format!(
                "worker-{}",
                rayon::current_thread_index().unwrap_or(0)
            );
            aggregator.append(&tag, &result);
            aggregator.fold(&result);
            progress.file_processed();
        });
    });

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    Ok(())
}
