//! Error types for rule evaluation.

use thiserror::Error;

use tflayout_model::ModuleError;

/// Result type alias for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that abort a rule invocation.
///
/// Findings are not errors: misplaced declarations and missing files come
/// back as diagnostics. An error here means the invocation itself failed.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The module reader failed. The failing check propagates this
    /// immediately and the invocation's remaining checks are abandoned.
    #[error("module query failed: {0}")]
    Query(#[from] ModuleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
