//! # tflayout_model
//!
//! Module snapshot model for the tflayout rule engine.
//!
//! This crate defines everything a rule sees of a Terraform module:
//!
//! - **Source positions**: [`Pos`] and [`SourceRange`]
//! - **Declarations**: [`DeclarationKind`], [`BlockQuery`], [`DeclaredBlock`]
//! - **Findings**: [`Diagnostic`]
//! - **The reader seam**: [`ModuleReader`], with [`MemoryModule`] as the
//!   in-memory implementation hosts and tests build snapshots with
//!
//! Parsing does not happen here. A host that owns a real HCL parser
//! implements [`ModuleReader`] over its parse result and hands the snapshot
//! to the rules; the rules only ever query it.

pub mod block;
pub mod diagnostic;
pub mod error;
pub mod module;
pub mod source;

pub use block::{BlockQuery, DeclarationKind, DeclaredBlock};
pub use diagnostic::Diagnostic;
pub use error::{ModelResult, ModuleError};
pub use module::{MemoryModule, ModuleReader};
pub use source::{Pos, SourceRange};
