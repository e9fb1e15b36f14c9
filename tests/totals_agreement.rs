// tests/totals_agreement.rs
//
// The primary correctness property of the subsystem: every strategy produces
// numerically identical totals for the same workspace.

use readbench::aggregate::{Aggregator, SharedLog};
use readbench::config::{Config, WorkspaceConfig};
use readbench::core_types::RunTotals;
use readbench::progress::NoOpProgress;
use readbench::shutdown::CancellationToken;
use readbench::workspace::Workspace;
use readbench::Strategy;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn build_workspace(root: &Path, files: usize, lines: usize) -> Workspace {
    Workspace::build(&WorkspaceConfig {
        root: root.to_path_buf(),
        file_count: files,
        lines_per_file: lines,
    })
    .unwrap()
}

fn run_strategy(strategy: Strategy, workspace: &Workspace, config: &Config) -> RunTotals {
    let log = Arc::new(
        SharedLog::open(&config.log_path(), config.report.accumulate_log).unwrap(),
    );
    let aggregator = Aggregator::new(strategy.name(), log);
    let report = strategy
        .run(
            workspace,
            &aggregator,
            config,
            &CancellationToken::new(),
            &NoOpProgress,
        )
        .unwrap();
    report.totals
}

#[test]
fn all_strategies_agree_on_totals() {
    let temp = tempdir().unwrap();
    let mut config = Config::new_for_test(temp.path());
    config.workspace.file_count = 7;
    config.workspace.lines_per_file = 200;
    let workspace = build_workspace(temp.path(), 7, 200);
    let expected = workspace.expected_totals();

    for strategy in Strategy::ALL {
        let totals = run_strategy(strategy, &workspace, &config);
        assert_eq!(totals, expected, "{} totals diverged", strategy.name());
    }
}

#[test]
fn five_files_of_one_thousand_lines_scenario() {
    let temp = tempdir().unwrap();
    let config = Config::new_for_test(temp.path());
    let workspace = build_workspace(temp.path(), 5, 1000);

    let sequential = run_strategy(Strategy::Sequential, &workspace, &config);
    let parallel = run_strategy(Strategy::Parallel, &workspace, &config);

    assert_eq!(sequential.total_lines, 5000);
    assert_eq!(parallel.total_lines, 5000);
    assert_eq!(sequential.total_words, parallel.total_words);
}

#[test]
fn single_worker_parallel_matches_sequential() {
    let temp = tempdir().unwrap();
    let mut config = Config::new_for_test(temp.path());
    config.execution.workers = 1;
    let workspace = build_workspace(temp.path(), 4, 250);

    let sequential = run_strategy(Strategy::Sequential, &workspace, &config);
    let parallel = run_strategy(Strategy::Parallel, &workspace, &config);

    assert_eq!(sequential, parallel);
}

#[test]
fn rebuilt_workspace_reproduces_identical_totals() {
    // Same parameters, two builds: deterministic content means the measured
    // totals agree across builds, not just within one.
    let temp_a = tempdir().unwrap();
    let temp_b = tempdir().unwrap();
    let config_a = Config::new_for_test(temp_a.path());
    let config_b = Config::new_for_test(temp_b.path());

    let workspace_a = build_workspace(temp_a.path(), 3, 120);
    let workspace_b = build_workspace(temp_b.path(), 3, 120);

    let totals_a = run_strategy(Strategy::Concurrent, &workspace_a, &config_a);
    let totals_b = run_strategy(Strategy::Concurrent, &workspace_b, &config_b);

    assert_eq!(totals_a, totals_b);
}
