//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the
//! CLI, making them available to the rest of the application in a structured
//! and type-safe manner.

use crate::constants::LOG_FILE_NAME;
use crate::strategy::Strategy;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Configuration for workspace construction: where the input files live and
/// how much synthetic work they carry.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Directory that holds the generated input files and the shared log.
    pub root: PathBuf,
    /// Number of input files to generate.
    pub file_count: usize,
    /// Number of lines per generated file.
    pub lines_per_file: usize,
}

/// Configuration for strategy execution.
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Worker threads for the parallel strategy's pool.
    pub workers: usize,
    /// Strategies to run, already deduplicated and in canonical order.
    pub strategies: Vec<Strategy>,
}

/// Configuration for the shared log and the final report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Append to an existing shared log instead of truncating at startup.
    pub accumulate_log: bool,
    /// Emit the report as JSON instead of the human-readable table.
    pub json: bool,
    /// Where the final report should be written.
    pub destination: OutputDestination,
}

/// All settings for one comparison run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Configuration for the workspace build.
    pub workspace: WorkspaceConfig,
    /// Configuration for strategy execution.
    pub execution: ExecutionConfig,
    /// Configuration for logging and reporting.
    pub report: ReportConfig,
}

impl Config {
    /// Path of the shared log file inside the workspace root.
    pub fn log_path(&self) -> PathBuf {
        self.workspace.root.join(LOG_FILE_NAME)
    }

    /// Creates a small `Config` rooted at `root` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            workspace: WorkspaceConfig {
                root: root.into(),
                file_count: 3,
                lines_per_file: 50,
            },
            execution: ExecutionConfig {
                workers: 2,
                strategies: Strategy::ALL.to_vec(),
            },
            report: ReportConfig {
                accumulate_log: false,
                json: false,
                destination: OutputDestination::Stdout,
            },
        }
    }
}

/// Represents the destination for the generated report.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}
