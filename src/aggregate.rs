//! Mutation-safe aggregation of per-file results.
//!
//! `RunTotals` and the shared log are the only resources mutated by more than
//! one execution context within a run, so both live behind mutexes here. Each
//! strategy run owns its own `Aggregator` (fresh totals, fresh entry
//! counter); all runs of one comparison share a single `SharedLog`, each
//! tagging its lines with the strategy name.
//!
//! Locking discipline: every lock is held only for a constant-size update.
//! Formatting happens before the lock is taken, and no caller-supplied code
//! ever runs under a lock, so waiting under contention is bounded by the
//! number of concurrent callers, not by file size.

use crate::core_types::{ProcessResult, RunTotals};
use crate::errors::{io_error_with_path, Result};
use log::warn;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// The append-only log file shared by every strategy run of one comparison.
///
/// Appends are serialized at line granularity: a line from one caller is
/// never interleaved with another's.
#[derive(Debug)]
pub struct SharedLog {
    path: PathBuf,
    writer: Mutex<BufWriter<std::fs::File>>,
}

impl SharedLog {
    /// Opens (and by default truncates) the shared log file.
    ///
    /// With `accumulate` set, an existing log is appended to instead, so one
    /// log can collect several comparison runs.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened for writing.
    pub fn open(path: &Path, accumulate: bool) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        if accumulate {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options
            .open(path)
            .map_err(|e| io_error_with_path(e, path))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one complete line. The line is formatted by the caller before
    /// the lock is taken, so the critical section is a single buffered write.
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Log mutex poisoned: {}", e)))?;
        writeln!(writer, "{}", line)
    }

    /// Flushes buffered lines to disk. The harness calls this after each
    /// strategy's join barrier.
    pub fn flush(&self) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Log mutex poisoned: {}", e)))?;
        writer.flush()
    }
}

/// Per-run accumulator: totals plus the log append sink.
///
/// `fold` and `append` are safe to call concurrently from an unbounded number
/// of callers within one run; the harness reads `snapshot` only after the
/// run's join barrier.
pub struct Aggregator {
    strategy_tag: &'static str,
    totals: Mutex<RunTotals>,
    appended: AtomicUsize,
    log: Arc<SharedLog>,
}

impl Aggregator {
    /// Creates a fresh accumulator for one strategy run.
    pub fn new(strategy_tag: &'static str, log: Arc<SharedLog>) -> Self {
        Self {
            strategy_tag,
            totals: Mutex::new(RunTotals::default()),
            appended: AtomicUsize::new(0),
            log,
        }
    }

    /// Atomically folds one result into the running totals.
    ///
    /// The read-modify-write happens entirely under the totals mutex, so the
    /// net effect of N concurrent folds is the same regardless of
    /// interleaving. A poisoned mutex is recovered rather than propagated:
    /// the guarded update itself cannot panic, and losing counts to a
    /// poisoned-lock error would violate the no-lost-updates invariant.
    pub fn fold(&self, result: &ProcessResult) {
        let mut totals = self
            .totals
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        totals.record(result);
    }

    /// Appends one log line for `result`, tagged with the worker or task that
    /// produced it. Lines from different callers may land in any relative
    /// order, but each line is written whole.
    ///
    /// A failed log write is reported and swallowed: the log is an
    /// observation channel, and losing a line must not distort the totals.
    pub fn append(&self, worker: &str, result: &ProcessResult) {
        let status = match &result.error {
            None => "ok".to_string(),
            Some(cause) => format!("error:{}", cause),
        };
        let line = format!(
            "{} [{}] [{}] {} lines={} words={} elapsed_us={} status={}",
            unix_millis(),
            self.strategy_tag,
            worker,
            result.file_id,
            result.line_count,
            result.word_count,
            result.elapsed_micros,
            status
        );

        match self.log.write_line(&line) {
            Ok(()) => {
                self.appended.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => warn!(
                "Dropped log entry for '{}' ({} run): {}",
                result.file_id, self.strategy_tag, e
            ),
        }
    }

    /// Copy of the totals. Only meaningful once every dispatched unit of work
    /// for the run has completed.
    pub fn snapshot(&self) -> RunTotals {
        *self
            .totals
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of log entries this run appended successfully.
    pub fn entry_count(&self) -> usize {
        self.appended.load(Ordering::SeqCst)
    }

    /// Strategy tag stamped on this run's log lines.
    pub fn strategy_tag(&self) -> &'static str {
        self.strategy_tag
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
