// tests/aggregator_concurrency.rs
//
// The aggregator is the one shared-mutation point of the whole subsystem;
// these tests drive it directly with unbounded concurrent callers.

use readbench::aggregate::{Aggregator, SharedLog};
use readbench::core_types::ProcessResult;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

fn unit_result(id: &str) -> ProcessResult {
    ProcessResult::ok(id.to_string(), 1, 1, Duration::from_micros(1))
}

fn fold_concurrently(folds: usize) -> usize {
    let temp = tempdir().unwrap();
    let log = Arc::new(SharedLog::open(&temp.path().join("agg.log"), false).unwrap());
    let aggregator = Arc::new(Aggregator::new("parallel", log));

    // Spread the folds across enough threads to make interleaving likely.
    let workers = folds.min(8).max(1);
    let per_worker = folds / workers;
    let remainder = folds % workers;

    let threads: Vec<_> = (0..workers)
        .map(|w| {
            let agg = aggregator.clone();
            let count = per_worker + usize::from(w < remainder);
            thread::spawn(move || {
                for _ in 0..count {
                    agg.fold(&unit_result("unit"));
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    aggregator.snapshot().total_lines
}

#[test]
fn no_lost_updates_for_one_fold() {
    assert_eq!(fold_concurrently(1), 1);
}

#[test]
fn no_lost_updates_for_ten_folds() {
    assert_eq!(fold_concurrently(10), 10);
}

#[test]
fn no_lost_updates_for_one_thousand_folds() {
    assert_eq!(fold_concurrently(1000), 1000);
}

#[test]
fn concurrent_appends_stay_whole_and_complete() {
    let temp = tempdir().unwrap();
    let log_path = temp.path().join("agg.log");
    let log = Arc::new(SharedLog::open(&log_path, false).unwrap());
    let aggregator = Arc::new(Aggregator::new("parallel", log.clone()));

    let threads: Vec<_> = (0..10)
        .map(|w| {
            let agg = aggregator.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    agg.append(
                        &format!("worker-{}", w),
                        &unit_result(&format!("file-{}-{}", w, i)),
                    );
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }
    log.flush().unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 500);
    assert_eq!(aggregator.entry_count(), 500);

    // Every line is whole: it parses back to the fixed field layout and
    // references a distinct file id.
    let mut seen = HashSet::new();
    for line in lines {
        assert!(line.contains("[parallel]"), "malformed line: {}", line);
        assert!(line.contains("status=ok"), "malformed line: {}", line);
        let file_id = line
            .split_whitespace()
            .nth(3)
            .unwrap_or_else(|| panic!("missing file id column: {}", line));
        assert!(seen.insert(file_id.to_string()), "duplicate entry: {}", file_id);
    }
}
