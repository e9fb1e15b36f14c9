// src/constants.rs

/// File name of the shared log inside the workspace root.
pub const LOG_FILE_NAME: &str = "readbench.log";

/// Filler appended to every generated record line.
pub const RECORD_FILLER: &str = "quick brown fox jumps over";

/// Words per generated line: "record", the file id, the line number, plus
/// the words of [`RECORD_FILLER`]. Kept in sync by a unit test in
/// `workspace.rs`.
pub const WORDS_PER_LINE: usize = 8;

/// Separator used before the comparison summary section.
pub const SUMMARY_SEPARATOR: &str = "---";
