//! Findings reported by rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::source::SourceRange;

/// A single finding: what is wrong and where.
///
/// Diagnostics are immutable once produced; ownership passes to the caller
/// with the check's return value and nothing is retained across
/// invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable description of the finding
    pub message: String,
    /// Source location the finding points at
    pub range: SourceRange,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: SourceRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.range, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Pos;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(
            "output \"y\" should be moved from main.tf to _outputs.tf",
            SourceRange::new("main.tf", Pos::new(7, 1), Pos::new(7, 11)),
        );

        assert_eq!(
            diagnostic.to_string(),
            "main.tf:7:1: output \"y\" should be moved from main.tf to _outputs.tf"
        );
    }

    #[test]
    fn test_diagnostic_serializes_with_location() {
        let diagnostic = Diagnostic::new(
            "Module should include a _init.tf file.",
            SourceRange::start_of_file("_init.tf"),
        );

        let json = serde_json::to_value(&diagnostic).unwrap();

        assert_eq!(json["message"], "Module should include a _init.tf file.");
        assert_eq!(json["range"]["filename"], "_init.tf");
        assert_eq!(json["range"]["start"]["line"], 1);
        assert_eq!(json["range"]["start"]["column"], 1);
    }
}
