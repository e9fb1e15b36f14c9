//! Deterministic workspace construction.
//!
//! The workspace owns the set of input files every strategy processes. Files
//! are generated with fixed, reproducible content (a constant number of words
//! per line) so that line and word totals are exact test oracles, and the
//! same physical work is repeated per strategy for a fair comparison.

use crate::config::WorkspaceConfig;
use crate::constants::{RECORD_FILLER, WORDS_PER_LINE};
use crate::core_types::{FileHandle, RunTotals};
use crate::errors::{io_error_with_path, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Owns the input file set. Built once before any strategy runs; strategies
/// receive read-only handle slices.
#[derive(Debug)]
pub struct Workspace {
    handles: Vec<FileHandle>,
}

impl Workspace {
    /// Creates the workspace directory and writes `file_count` files of
    /// `lines_per_file` lines each.
    ///
    /// Building is idempotent: re-running against an already-populated
    /// location deterministically overwrites the same files.
    ///
    /// # Errors
    /// Returns `Error::Io` if the backing location cannot be created or
    /// written. This is fatal to the whole comparison run.
    pub fn build(config: &WorkspaceConfig) -> Result<Self> {
        fs::create_dir_all(&config.root).map_err(|e| io_error_with_path(e, &config.root))?;

        let mut handles = Vec::with_capacity(config.file_count);
        for index in 0..config.file_count {
            handles.push(write_input_file(
                &config.root,
                index,
                config.lines_per_file,
            )?);
        }

        info!(
            "Workspace ready at '{}': {} files x {} lines",
            config.root.display(),
            config.file_count,
            config.lines_per_file
        );
        Ok(Self { handles })
    }

    /// Read-only view of the file handles, in generation order.
    pub fn handles(&self) -> &[FileHandle] {
        &self.handles
    }

    /// Number of files in the workspace.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the workspace holds no files.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Oracle totals for a run in which every read succeeds, derived from the
    /// generation parameters rather than from re-reading the files.
    pub fn expected_totals(&self) -> RunTotals {
        let total_lines: usize = self.handles.iter().map(|h| h.expected_lines).sum();
        RunTotals {
            total_lines,
            total_words: total_lines * WORDS_PER_LINE,
            processed_count: self.handles.len(),
            error_count: 0,
        }
    }
}

fn write_input_file(root: &Path, index: usize, lines: usize) -> Result<FileHandle> {
    let id = format!("input-{:02}", index);
    let path = root.join(format!("{}.txt", id));
    debug!("Generating '{}' ({} lines)", path.display(), lines);

    let file = File::create(&path).map_err(|e| io_error_with_path(e, &path))?;
    let mut writer = BufWriter::new(file);
    for line in 0..lines {
        writeln!(writer, "record {} {:06} {}", id, line, RECORD_FILLER)
            .map_err(|e| io_error_with_path(e, &path))?;
    }
    writer.flush().map_err(|e| io_error_with_path(e, &path))?;

    Ok(FileHandle {
        id,
        path,
        expected_lines: lines,
    })
}
