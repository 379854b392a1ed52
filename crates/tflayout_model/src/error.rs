//! Error types for the module model.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModuleError>;

/// Errors a module reader can surface to the rules.
///
/// These originate host-side (an upstream parse failure, an unreadable
/// source). They are distinct from findings: a check that hits one
/// propagates it instead of producing diagnostics.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("failed to enumerate module files: {0}")]
    Files(String),

    #[error("failed to enumerate {block_type} blocks: {reason}")]
    Blocks { block_type: String, reason: String },
}
