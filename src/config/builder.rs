use super::{Config, ExecutionConfig, OutputDestination, ReportConfig, WorkspaceConfig};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use crate::strategy::Strategy;
use std::path::PathBuf;

/// Builds a validated [`Config`] from CLI arguments or programmatic calls.
///
/// Validation happens in [`ConfigBuilder::build`]: a zero file or line count
/// is rejected, a worker count of zero resolves to the host's hardware
/// concurrency, and the strategy list is deduplicated into the canonical
/// sequential, concurrent, parallel order.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    root: Option<PathBuf>,
    file_count: Option<usize>,
    lines_per_file: Option<usize>,
    workers: Option<usize>,
    strategies: Option<Vec<Strategy>>,
    accumulate_log: bool,
    json: bool,
    output_file: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder with every knob at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            root: Some(PathBuf::from(cli.workspace)),
            file_count: Some(cli.file_count),
            lines_per_file: Some(cli.lines_per_file),
            workers: Some(cli.workers),
            strategies: cli.strategies,
            accumulate_log: cli.accumulate_log,
            json: cli.json,
            output_file: cli.output_file.map(PathBuf::from),
        }
    }

    /// Sets the workspace root directory.
    pub fn root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets the number of input files to generate.
    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = Some(count);
        self
    }

    /// Sets the number of lines per generated file.
    pub fn lines_per_file(mut self, lines: usize) -> Self {
        self.lines_per_file = Some(lines);
        self
    }

    /// Sets the parallel strategy's worker count (0 = hardware concurrency).
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Restricts the run to the given strategies.
    pub fn strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = Some(strategies);
        self
    }

    /// Appends to an existing shared log instead of truncating it.
    pub fn accumulate_log(mut self, accumulate: bool) -> Self {
        self.accumulate_log = accumulate;
        self
    }

    /// Emits the report as JSON.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Writes the report to a file instead of stdout.
    pub fn output_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Validates the collected settings and produces a [`Config`].
    ///
    /// # Errors
    /// Returns `Error::Config` for a zero file count or zero lines per file.
    pub fn build(self) -> Result<Config> {
        let file_count = self.file_count.unwrap_or(8);
        if file_count == 0 {
            return Err(Error::Config(
                "file count must be at least 1".to_string(),
            ));
        }

        let lines_per_file = self.lines_per_file.unwrap_or(20_000);
        if lines_per_file == 0 {
            return Err(Error::Config(
                "lines per file must be at least 1".to_string(),
            ));
        }

        let workers = match self.workers {
            Some(0) | None => num_cpus::get(),
            Some(n) => n,
        };

        // Subset selection keeps the canonical report order and drops
        // duplicates, so `-s parallel -s sequential -s parallel` still runs
        // sequential first and parallel once.
        let requested = self.strategies.unwrap_or_else(|| Strategy::ALL.to_vec());
        let strategies: Vec<Strategy> = Strategy::ALL
            .into_iter()
            .filter(|s| requested.contains(s))
            .collect();

        let destination = match self.output_file {
            Some(path) => OutputDestination::File(path),
            None => OutputDestination::Stdout,
        };

        Ok(Config {
            workspace: WorkspaceConfig {
                root: self.root.unwrap_or_else(|| PathBuf::from("readbench-data")),
                file_count,
                lines_per_file,
            },
            execution: ExecutionConfig {
                workers,
                strategies,
            },
            report: ReportConfig {
                accumulate_log: self.accumulate_log,
                json: self.json,
                destination,
            },
        })
    }
}
