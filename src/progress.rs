// src/progress.rs

//! Defines a trait for reporting per-strategy progress.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A trait for reporting progress, abstracting over specific implementations
/// like `indicatif`.
///
/// One strategy run maps onto one `strategy_started` .. `strategy_finished`
/// window; `file_processed` is invoked once per file, possibly from many
/// threads at once.
pub trait ProgressReporter: Send + Sync {
    /// Announces a new strategy run over `total_files` files.
    fn strategy_started(&self, name: &'static str, total_files: u64);
    /// Records one processed file.
    fn file_processed(&self);
    /// Closes out the current strategy run.
    fn strategy_finished(&self, name: &'static str);
}

/// A `ProgressReporter` that does nothing.
///
/// This is used as a default or in non-interactive environments where a
/// progress bar is not desired.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn strategy_started(&self, _name: &'static str, _total_files: u64) {}
    fn file_processed(&self) {}
    fn strategy_finished(&self, _name: &'static str) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn strategy_started(&self, name: &'static str, total_files: u64) {
        self.bar.reset();
        self.bar.set_length(total_files);
        self.bar.set_message(name);
    }

    fn file_processed(&self) {
        self.bar.inc(1);
    }

    fn strategy_finished(&self, name: &'static str) {
        self.bar.println(format!("{} done", name));
    }
}
