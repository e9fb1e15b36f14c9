//! Sequential driver: the baseline discipline.
//!
//! Files are processed one at a time, in workspace order, on the calling
//! thread. The result for file *i* is folded into the aggregator before the
//! read of file *i+1* begins.

use crate::aggregate::Aggregator;
use crate::errors::{Error, Result};
use crate::processor::process_file;
use crate::progress::ProgressReporter;
use crate::shutdown::CancellationToken;
use crate::workspace::Workspace;

pub(super) fn run(
    workspace: &Workspace,
    aggregator: &Aggregator,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    for handle in workspace.handles() {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let result = process_file(handle);
        aggregator.append("main", &result);
        aggregator.fold(&result);
        progress.file_processed();
    }
    Ok(())
}
