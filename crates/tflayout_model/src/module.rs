//! The reader seam between a host and the rules.

use std::collections::BTreeSet;

use crate::block::{BlockQuery, DeclaredBlock};
use crate::error::ModelResult;

/// Read access to one immutable module snapshot.
///
/// The snapshot must not change for the duration of an invocation; rules
/// hold no state of their own, so separate invocations against the same or
/// different snapshots are fully independent. Both methods are synchronous
/// and each is queried at most once per check.
pub trait ModuleReader {
    /// The names of the files the module consists of.
    fn files(&self) -> ModelResult<BTreeSet<String>>;

    /// All top-level blocks matching `query`, in the order the host
    /// discovered them. Each block carries at most the labels the query
    /// asked for.
    fn blocks(&self, query: &BlockQuery) -> ModelResult<Vec<DeclaredBlock>>;
}

/// An in-memory [`ModuleReader`] built directly from files and blocks.
///
/// Hosts that already extracted declarations (and tests) assemble a
/// snapshot with the builder methods and run rules against it:
///
/// ```
/// use tflayout_model::{DeclaredBlock, MemoryModule, SourceRange};
///
/// let module = MemoryModule::new()
///     .with_file("_outputs.tf")
///     .with_block(DeclaredBlock::new(
///         "variable",
///         ["region"],
///         SourceRange::start_of_file("_variables.tf"),
///     ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryModule {
    files: BTreeSet<String>,
    blocks: Vec<DeclaredBlock>,
}

impl MemoryModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the module's file set.
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.files.insert(name.into());
        self
    }

    /// Add a declared block. The file it is declared in joins the file set.
    pub fn with_block(mut self, block: DeclaredBlock) -> Self {
        self.files.insert(block.def_range.filename.clone());
        self.blocks.push(block);
        self
    }
}

impl ModuleReader for MemoryModule {
    fn files(&self) -> ModelResult<BTreeSet<String>> {
        Ok(self.files.clone())
    }

    fn blocks(&self, query: &BlockQuery) -> ModelResult<Vec<DeclaredBlock>> {
        Ok(self
            .blocks
            .iter()
            .filter(|block| block.block_type == query.block_type)
            .map(|block| {
                let mut block = block.clone();
                block.labels.truncate(query.label_names.len());
                block
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::DeclarationKind;
    use crate::source::{Pos, SourceRange};

    fn block_at(block_type: &str, labels: &[&str], file: &str, line: usize) -> DeclaredBlock {
        DeclaredBlock::new(
            block_type,
            labels.iter().copied(),
            SourceRange::new(file, Pos::new(line, 1), Pos::new(line, 20)),
        )
    }

    #[test]
    fn test_blocks_filtered_by_type() {
        let module = MemoryModule::new()
            .with_block(block_at("variable", &["a"], "main.tf", 1))
            .with_block(block_at("output", &["b"], "main.tf", 4))
            .with_block(block_at("variable", &["c"], "main.tf", 8));

        let variables = module.blocks(&DeclarationKind::Variable.query()).unwrap();

        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0].label(0), "a");
        assert_eq!(variables[1].label(0), "c");
    }

    #[test]
    fn test_blocks_keep_insertion_order() {
        let module = MemoryModule::new()
            .with_block(block_at("output", &["z"], "b.tf", 1))
            .with_block(block_at("output", &["a"], "a.tf", 1));

        let outputs = module.blocks(&DeclarationKind::Output.query()).unwrap();

        // Insertion order, never sorted.
        assert_eq!(outputs[0].label(0), "z");
        assert_eq!(outputs[1].label(0), "a");
    }

    #[test]
    fn test_labels_truncated_to_query_schema() {
        let module =
            MemoryModule::new().with_block(block_at("terraform", &["stray"], "main.tf", 1));

        let settings = module
            .blocks(&DeclarationKind::TerraformSettings.query())
            .unwrap();

        assert_eq!(settings[0].labels.len(), 0);
        assert_eq!(settings[0].label(0), "");
    }

    #[test]
    fn test_declared_blocks_imply_their_file() {
        let module = MemoryModule::new()
            .with_file("_init.tf")
            .with_block(block_at("variable", &["x"], "main.tf", 1));

        let files = module.files().unwrap();

        assert!(files.contains("_init.tf"));
        assert!(files.contains("main.tf"));
    }

    #[test]
    fn test_empty_module_has_no_files_or_blocks() {
        let module = MemoryModule::new();

        assert!(module.files().unwrap().is_empty());
        assert!(module
            .blocks(&DeclarationKind::Provider.query())
            .unwrap()
            .is_empty());
    }
}
