//! Severity levels for rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a rule's findings are for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - does not block
    Info,
    /// Warning - reported but does not block
    Warning,
    /// Error - blocks
    #[default]
    Error,
}

impl Severity {
    /// Whether findings at this severity should fail a lint run.
    pub fn blocks(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_blocks() {
        assert!(!Severity::Info.blocks());
        assert!(!Severity::Warning.blocks());
        assert!(Severity::Error.blocks());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
