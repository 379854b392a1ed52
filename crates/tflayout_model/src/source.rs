//! Source positions and ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in a source file. Lines and columns are 1-based, matching
/// HCL convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

impl Pos {
    /// The first position of a file (line 1, column 1).
    pub const FIRST: Pos = Pos { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A span of source within one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    /// File the range points into
    pub filename: String,
    /// Start of the range
    pub start: Pos,
    /// End of the range
    pub end: Pos,
}

impl SourceRange {
    pub fn new(filename: impl Into<String>, start: Pos, end: Pos) -> Self {
        Self {
            filename: filename.into(),
            start,
            end,
        }
    }

    /// A range pointing at the very start of a file. Findings about files
    /// that do not exist yet anchor here.
    pub fn start_of_file(filename: impl Into<String>) -> Self {
        Self::new(filename, Pos::FIRST, Pos::FIRST)
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.filename, self.start.line, self.start.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_file_points_at_first_position() {
        let range = SourceRange::start_of_file("_variables.tf");

        assert_eq!(range.filename, "_variables.tf");
        assert_eq!(range.start, Pos::FIRST);
        assert_eq!(range.end, Pos::FIRST);
    }

    #[test]
    fn test_range_display() {
        let range = SourceRange::new("main.tf", Pos::new(3, 1), Pos::new(3, 14));

        assert_eq!(range.to_string(), "main.tf:3:1");
    }
}
