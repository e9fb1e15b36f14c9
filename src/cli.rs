// src/cli.rs

use crate::strategy::Strategy;
use clap::Parser;

/// Benchmark harness comparing three file-processing execution strategies.
///
/// readbench generates a deterministic set of input files, processes every
/// file under a sequential, a suspension-based (async), and a thread-pool
/// strategy, folds per-file line/word counts into shared totals plus a shared
/// log, and reports wall-clock elapsed time per strategy. All three
/// strategies perform the same physical work, so their totals must agree;
/// only scheduling and elapsed time differ.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory for the generated input files and the shared log.
    #[arg(default_value = "readbench-data")]
    pub workspace: String,

    // --- Workload Options ---
    /// Number of input files to generate.
    #[arg(short = 'f', long = "files", value_name = "COUNT", default_value_t = 8)]
    pub file_count: usize,

    /// Number of lines per generated file.
    #[arg(short = 'l', long = "lines", value_name = "COUNT", default_value_t = 20_000)]
    pub lines_per_file: usize,

    /// Worker threads for the parallel strategy (0 = hardware concurrency).
    #[arg(short = 'j', long = "workers", value_name = "THREADS", default_value_t = 0)]
    pub workers: usize,

    /// Run only the given strategies (repeatable). Default: all three, in the
    /// order sequential, concurrent, parallel.
    #[arg(short = 's', long = "strategy", value_enum, value_name = "STRATEGY", num_args = 1..)]
    pub strategies: Option<Vec<Strategy>>,

    // --- Log & Output Options ---
    /// Append to an existing shared log instead of truncating it at startup.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub accumulate_log: bool,

    /// Emit the comparison report as JSON instead of the human-readable table.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Write the report to the specified file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,
}
