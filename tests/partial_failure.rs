// tests/partial_failure.rs
//
// One unreadable file must never abort a strategy run: it is recorded as a
// processed-but-errored entry and excluded from the line/word sums.

use readbench::aggregate::{Aggregator, SharedLog};
use readbench::config::{Config, WorkspaceConfig};
use readbench::progress::NoOpProgress;
use readbench::shutdown::CancellationToken;
use readbench::workspace::Workspace;
use readbench::Strategy;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

const FILES: usize = 5;
const LINES: usize = 100;

fn workspace_with_one_missing_file(root: &std::path::Path) -> Workspace {
    let workspace = Workspace::build(&WorkspaceConfig {
        root: root.to_path_buf(),
        file_count: FILES,
        lines_per_file: LINES,
    })
    .unwrap();
    // Knock one file out from under its handle.
    fs::remove_file(&workspace.handles()[2].path).unwrap();
    workspace
}

#[test]
fn every_strategy_isolates_a_single_read_failure() {
    let temp = tempdir().unwrap();
    let config = Config::new_for_test(temp.path());
    let workspace = workspace_with_one_missing_file(temp.path());

    for strategy in Strategy::ALL {
        let log = Arc::new(SharedLog::open(&config.log_path(), false).unwrap());
        let aggregator = Aggregator::new(strategy.name(), log.clone());

        let report = strategy
            .run(
                &workspace,
                &aggregator,
                &config,
                &CancellationToken::new(),
                &NoOpProgress,
            )
            .unwrap_or_else(|e| panic!("{} aborted on a per-file failure: {}", strategy.name(), e));

        assert_eq!(report.totals.processed_count, FILES);
        assert_eq!(report.totals.error_count, 1);
        assert_eq!(report.totals.total_lines, (FILES - 1) * LINES);

        // The log still carries one entry per file, the missing one tagged
        // as an error.
        log.flush().unwrap();
        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.lines().count(), FILES);
        assert_eq!(
            content
                .lines()
                .filter(|l| l.contains("status=error:"))
                .count(),
            1
        );
        assert!(content
            .lines()
            .any(|l| l.contains("input-02") && l.contains("status=error:")));
    }
}

#[test]
fn log_references_each_file_exactly_once_per_run() {
    let temp = tempdir().unwrap();
    let config = Config::new_for_test(temp.path());
    let workspace = Workspace::build(&WorkspaceConfig {
        root: temp.path().to_path_buf(),
        file_count: FILES,
        lines_per_file: 20,
    })
    .unwrap();

    for strategy in Strategy::ALL {
        let log = Arc::new(SharedLog::open(&config.log_path(), false).unwrap());
        let aggregator = Aggregator::new(strategy.name(), log.clone());
        strategy
            .run(
                &workspace,
                &aggregator,
                &config,
                &CancellationToken::new(),
                &NoOpProgress,
            )
            .unwrap();
        log.flush().unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        for handle in workspace.handles() {
            assert_eq!(
                content
                    .lines()
                    .filter(|l| l.split_whitespace().nth(3) == Some(handle.id.as_str()))
                    .count(),
                1,
                "{} run logged '{}' other than exactly once",
                strategy.name(),
                handle.id
            );
        }
    }
}
