//! Declaration kinds and discovered blocks.

use serde::{Deserialize, Serialize};

use crate::source::SourceRange;

/// The categories of declaration the layout policy places.
///
/// The set is closed: every kind the layout rule checks is listed here,
/// and the policy maps each one to exactly one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `variable "name" {}` input declarations
    Variable,
    /// `output "name" {}` declarations
    Output,
    /// `provider "name" {}` configurations
    Provider,
    /// The top-level `terraform {}` settings block
    TerraformSettings,
    /// `locals {}` value blocks
    Locals,
    /// `data "terraform_remote_state" "name" {}` sources. Enumerated as the
    /// general `data` block type; the rule narrows to the remote-state type.
    RemoteState,
}

impl DeclarationKind {
    /// Every kind, in the order the layout rule checks them.
    pub const ALL: [DeclarationKind; 6] = [
        DeclarationKind::Variable,
        DeclarationKind::Output,
        DeclarationKind::Provider,
        DeclarationKind::TerraformSettings,
        DeclarationKind::Locals,
        DeclarationKind::RemoteState,
    ];

    /// The block type keyword this kind is declared with in source.
    pub fn block_type(self) -> &'static str {
        match self {
            DeclarationKind::Variable => "variable",
            DeclarationKind::Output => "output",
            DeclarationKind::Provider => "provider",
            DeclarationKind::TerraformSettings => "terraform",
            DeclarationKind::Locals => "locals",
            DeclarationKind::RemoteState => "data",
        }
    }

    /// The label positions a reader attaches to blocks of this kind.
    pub fn label_names(self) -> &'static [&'static str] {
        match self {
            DeclarationKind::Variable
            | DeclarationKind::Output
            | DeclarationKind::Provider => &["name"],
            DeclarationKind::TerraformSettings | DeclarationKind::Locals => &[],
            DeclarationKind::RemoteState => &["type", "name"],
        }
    }

    /// The query a reader answers to enumerate this kind.
    pub fn query(self) -> BlockQuery {
        BlockQuery {
            block_type: self.block_type(),
            label_names: self.label_names(),
        }
    }
}

/// A request for all top-level blocks of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuery {
    /// Block type to enumerate (`variable`, `output`, `data`, ...)
    pub block_type: &'static str,
    /// Label positions to attach to each returned block
    pub label_names: &'static [&'static str],
}

/// A declaration instance discovered in the module.
///
/// Produced by [`crate::ModuleReader`] implementations; rules only read
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredBlock {
    /// Block type keyword as written in source
    pub block_type: String,
    /// Labels in declaration order, as many as the query asked for
    pub labels: Vec<String>,
    /// Where the block header is declared
    pub def_range: SourceRange,
}

impl DeclaredBlock {
    pub fn new<I, S>(block_type: impl Into<String>, labels: I, def_range: SourceRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            block_type: block_type.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            def_range,
        }
    }

    /// The label at `index`, or the empty string when the block has none
    /// there. Unlabeled blocks never error out of a check.
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }

    /// The file this block is declared in.
    pub fn filename(&self) -> &str {
        &self.def_range.filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Pos, SourceRange};

    #[test]
    fn test_kind_queries_match_source_keywords() {
        assert_eq!(DeclarationKind::Variable.block_type(), "variable");
        assert_eq!(DeclarationKind::TerraformSettings.block_type(), "terraform");
        assert_eq!(DeclarationKind::RemoteState.block_type(), "data");

        assert_eq!(DeclarationKind::Output.label_names(), &["name"]);
        assert_eq!(DeclarationKind::Locals.label_names(), &[] as &[&str]);
        assert_eq!(DeclarationKind::RemoteState.label_names(), &["type", "name"]);
    }

    #[test]
    fn test_missing_label_reads_as_empty_string() {
        let block = DeclaredBlock::new(
            "terraform",
            Vec::<String>::new(),
            SourceRange::new("main.tf", Pos::new(1, 1), Pos::new(1, 10)),
        );

        assert_eq!(block.label(0), "");
        assert_eq!(block.label(7), "");
    }

    #[test]
    fn test_labels_read_in_declaration_order() {
        let block = DeclaredBlock::new(
            "data",
            ["terraform_remote_state", "networking"],
            SourceRange::new("main.tf", Pos::new(4, 1), Pos::new(4, 40)),
        );

        assert_eq!(block.label(0), "terraform_remote_state");
        assert_eq!(block.label(1), "networking");
        assert_eq!(block.filename(), "main.tf");
    }
}
