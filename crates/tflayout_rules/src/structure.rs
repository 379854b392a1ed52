//! The module layout rule.
//!
//! Checks that a module carries the four standard files and that every
//! declaration lives in the file the policy assigns to its kind. Missing
//! files and misplaced declarations come back as diagnostics; a module
//! reader failure aborts the invocation instead.

use tracing::trace;

use tflayout_model::{DeclarationKind, DeclaredBlock, Diagnostic, ModuleReader, SourceRange};

use crate::error::RuleResult;
use crate::policy::LayoutPolicy;
use crate::rule::Rule;
use crate::severity::Severity;

/// Checks module file layout against a [`LayoutPolicy`].
///
/// The rule runs the file-presence check first, then one placement check
/// per declaration kind, in a fixed order. Checks run strictly
/// sequentially and each queries the reader exactly once, so diagnostic
/// ordering is fully determined: required-file order for presence
/// findings, then reader enumeration order within each kind.
#[derive(Debug, Clone, Default)]
pub struct ModuleLayoutRule {
    policy: LayoutPolicy,
}

impl ModuleLayoutRule {
    /// Rule with the canonical layout policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule with a custom layout policy.
    pub fn with_policy(policy: LayoutPolicy) -> Self {
        Self { policy }
    }

    /// One diagnostic per required file missing from the module. A present
    /// file satisfies the check regardless of content.
    fn check_files(&self, module: &dyn ModuleReader) -> RuleResult<Vec<Diagnostic>> {
        let files = module.files()?;

        let mut diagnostics = Vec::new();
        for name in self.policy.required_files() {
            if !files.contains(name) {
                diagnostics.push(Diagnostic::new(
                    format!("Module should include a {} file.", name),
                    SourceRange::start_of_file(name),
                ));
            }
        }

        Ok(diagnostics)
    }

    /// One diagnostic per block of `kind` declared outside its expected
    /// file, anchored at the block's own declaration range. Blocks in the
    /// expected file produce nothing.
    fn check_kind(
        &self,
        module: &dyn ModuleReader,
        kind: DeclarationKind,
    ) -> RuleResult<Vec<Diagnostic>> {
        let blocks = module.blocks(&kind.query())?;
        let expected = self.policy.expected_file(kind);

        let mut diagnostics = Vec::new();
        for block in &blocks {
            if !placement_applies(kind, block) {
                continue;
            }
            if block.filename() != expected {
                diagnostics.push(Diagnostic::new(
                    format!(
                        "{} {:?} should be moved from {} to {}",
                        kind_noun(kind),
                        display_label(kind, block),
                        block.filename(),
                        expected
                    ),
                    block.def_range.clone(),
                ));
            }
        }

        Ok(diagnostics)
    }
}

impl Rule for ModuleLayoutRule {
    fn name(&self) -> &'static str {
        "terraform_module_layout"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn link(&self) -> &'static str {
        "https://github.com/tflayout/tflayout/blob/main/docs/rules/terraform_module_layout.md"
    }

    fn check(&self, module: &dyn ModuleReader) -> RuleResult<Vec<Diagnostic>> {
        trace!("Check `{}` rule", self.name());

        let mut diagnostics = self.check_files(module)?;
        for kind in DeclarationKind::ALL {
            diagnostics.extend(self.check_kind(module, kind)?);
        }

        Ok(diagnostics)
    }
}

/// Whether the placement check applies to this block at all. Among data
/// sources only `terraform_remote_state` is placed; every other data
/// source type is ignored wherever it lives.
fn placement_applies(kind: DeclarationKind, block: &DeclaredBlock) -> bool {
    match kind {
        DeclarationKind::RemoteState => block.label(0) == "terraform_remote_state",
        _ => true,
    }
}

/// The words a placement finding opens with.
fn kind_noun(kind: DeclarationKind) -> &'static str {
    match kind {
        DeclarationKind::Variable => "variable",
        DeclarationKind::Output => "output",
        DeclarationKind::Provider => "provider",
        DeclarationKind::TerraformSettings => "terraform block",
        DeclarationKind::Locals => "locals block",
        DeclarationKind::RemoteState => "data terraform_remote_state",
    }
}

/// The label a placement finding displays. Data sources carry their name
/// in the second label slot; everything else uses the first. Unlabeled
/// blocks display as `""`.
fn display_label(kind: DeclarationKind, block: &DeclaredBlock) -> &str {
    match kind {
        DeclarationKind::RemoteState => block.label(1),
        _ => block.label(0),
    }
}
