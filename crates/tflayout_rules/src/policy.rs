//! The layout policy: which file each declaration kind belongs in.
//!
//! The policy is plain configuration handed to the rule at construction.
//! Defaults are the canonical file names; teams that deviate build their
//! own, or load one from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use tflayout_model::DeclarationKind;

use crate::error::{RuleError, RuleResult};

/// File-layout policy for a Terraform module.
///
/// Names the four standard files every conforming module must contain and
/// maps every [`DeclarationKind`] to the one file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPolicy {
    /// Settings, providers, locals blocks and remote state belong here
    #[serde(default = "default_init_file")]
    pub init_file: String,
    /// Input variable declarations belong here
    #[serde(default = "default_variables_file")]
    pub variables_file: String,
    /// Output declarations belong here
    #[serde(default = "default_outputs_file")]
    pub outputs_file: String,
    /// Must exist alongside the other three
    #[serde(default = "default_locals_file")]
    pub locals_file: String,
}

fn default_init_file() -> String {
    "_init.tf".to_string()
}

fn default_variables_file() -> String {
    "_variables.tf".to_string()
}

fn default_outputs_file() -> String {
    "_outputs.tf".to_string()
}

fn default_locals_file() -> String {
    "_locals.tf".to_string()
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            init_file: default_init_file(),
            variables_file: default_variables_file(),
            outputs_file: default_outputs_file(),
            locals_file: default_locals_file(),
        }
    }
}

impl LayoutPolicy {
    /// Policy with the canonical file names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the init file.
    pub fn with_init_file(mut self, name: impl Into<String>) -> Self {
        self.init_file = name.into();
        self
    }

    /// Rename the variables file.
    pub fn with_variables_file(mut self, name: impl Into<String>) -> Self {
        self.variables_file = name.into();
        self
    }

    /// Rename the outputs file.
    pub fn with_outputs_file(mut self, name: impl Into<String>) -> Self {
        self.outputs_file = name.into();
        self
    }

    /// Rename the locals file.
    pub fn with_locals_file(mut self, name: impl Into<String>) -> Self {
        self.locals_file = name.into();
        self
    }

    /// The file a declaration of `kind` belongs in.
    ///
    /// Total over the closed kind set: a kind without a destination does
    /// not compile.
    pub fn expected_file(&self, kind: DeclarationKind) -> &str {
        match kind {
            DeclarationKind::Variable => &self.variables_file,
            DeclarationKind::Output => &self.outputs_file,
            DeclarationKind::Provider
            | DeclarationKind::TerraformSettings
            | DeclarationKind::Locals
            | DeclarationKind::RemoteState => &self.init_file,
        }
    }

    /// The files every conforming module must contain, in report order.
    pub fn required_files(&self) -> [&str; 4] {
        [
            &self.init_file,
            &self.variables_file,
            &self.outputs_file,
            &self.locals_file,
        ]
    }

    /// Load a policy from a YAML file.
    pub fn from_file(path: &Path) -> RuleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a policy from a YAML string.
    pub fn from_yaml(yaml: &str) -> RuleResult<Self> {
        serde_yaml::from_str(yaml).map_err(RuleError::from)
    }

    /// Serialize the policy to YAML.
    pub fn to_yaml(&self) -> RuleResult<String> {
        serde_yaml::to_string(self).map_err(RuleError::from)
    }
}
