//! The rule contract.

use tflayout_model::{Diagnostic, ModuleReader};

use crate::error::RuleResult;
use crate::severity::Severity;

/// A lint rule the host runs against a module snapshot.
///
/// Rules are stateless between invocations: `check` recomputes everything
/// from the snapshot it is handed and returns its findings in one batch.
pub trait Rule {
    /// Stable identifier hosts enable and disable the rule by.
    fn name(&self) -> &'static str;

    /// Whether the rule is on by default.
    fn enabled(&self) -> bool {
        true
    }

    /// Severity of the rule's findings.
    fn severity(&self) -> Severity;

    /// Reference documentation for the rule, empty when there is none.
    fn link(&self) -> &'static str {
        ""
    }

    /// Run the rule against one module snapshot.
    fn check(&self, module: &dyn ModuleReader) -> RuleResult<Vec<Diagnostic>>;
}
