//! Concurrent driver: suspension-based scheduling.
//!
//! All reads are issued as independently schedulable futures on a
//! single-threaded tokio runtime: the driving thread yields at each read's
//! await point, so I/O waits overlap while counting and folding stay on the
//! one scheduler thread. `join_all` is the run's barrier; completion order is
//! non-deterministic, which the aggregator tolerates because folding is
//! commutative.

use crate::aggregate::Aggregator;
use crate::errors::{Error, Result};
use crate::processor::process_file_async;
use crate::progress::ProgressReporter;
use crate::shutdown::CancellationToken;
use crate::workspace::Workspace;
use futures::future::join_all;

pub(super) fn run(
    workspace: &Workspace,
    aggregator: &Aggregator,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Strategy {
            strategy: "concurrent",
            reason: e.to_string(),
        })?;

    runtime.block_on(async {
        let tasks = workspace.handles().iter().enumerate().map(|(index, handle)| {
            let tag = format!("task-{}", index);
            async move {
                if token.is_cancelled() {
                    return;
                }
                let result = process_file_async(handle).await;
                aggregator.append(&tag, &result);
                aggregator.fold(&result);
                progress.file_processed();
            }
        });
        join_all(tasks).await;
    });

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    Ok(())
}
