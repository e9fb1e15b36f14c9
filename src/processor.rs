//! Per-file processing: one full read plus line/word counting.
//!
//! Both entry points are content-agnostic, touch no shared mutable state,
//! and are safe to invoke concurrently from any number of callers. A failed
//! read is folded into the returned `ProcessResult` instead of being raised,
//! so partial failures stay isolated to their file.

use crate::core_types::{FileHandle, ProcessResult};
use log::warn;
use std::fs;
use std::time::Instant;

/// Reads `handle`'s file end-to-end on the calling thread and counts its
/// lines and words. Used by the sequential and parallel strategies.
pub fn process_file(handle: &FileHandle) -> ProcessResult {
    let started = Instant::now();
    match fs::read_to_string(&handle.path) {
        Ok(content) => {
            let (lines, words) = count_content(&content);
            ProcessResult::ok(handle.id.clone(), lines, words, started.elapsed())
        }
        Err(e) => {
            warn!("Read failed for '{}': {}", handle.path.display(), e);
            ProcessResult::failed(handle.id.clone(), e.to_string(), started.elapsed())
        }
    }
}

/// Suspension-based counterpart of [`process_file`]: the read yields to the
/// scheduler while waiting on I/O. Used by the concurrent strategy.
pub async fn process_file_async(handle: &FileHandle) -> ProcessResult {
    let started = Instant::now();
    match tokio::fs::read_to_string(&handle.path).await {
        Ok(content) => {
            let (lines, words) = count_content(&content);
            ProcessResult::ok(handle.id.clone(), lines, words, started.elapsed())
        }
        Err(e) => {
            warn!("Read failed for '{}': {}", handle.path.display(), e);
            ProcessResult::failed(handle.id.clone(), e.to_string(), started.elapsed())
        }
    }
}

/// Counts lines and words in `content`.
///
/// A "line" is a unit delimited by the platform line-break convention
/// (`str::lines` handles both `\n` and `\r\n`); a "word" is a maximal run of
/// non-whitespace characters.
#[inline]
fn count_content(content: &str) -> (usize, usize) {
    (
        content.lines().count(),
        content.split_whitespace().count(),
    )
}
