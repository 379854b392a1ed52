//! # tflayout_rules
//!
//! File-layout convention rules for Terraform modules.
//!
//! The flagship rule is [`ModuleLayoutRule`]: a module must carry the four
//! standard files (`_init.tf`, `_variables.tf`, `_outputs.tf`,
//! `_locals.tf`), and every declaration must live in the file
//! [`LayoutPolicy`] assigns to its kind. Variables belong in the variables
//! file, outputs in the outputs file, and providers, the `terraform {}`
//! settings block, `locals {}` blocks and `terraform_remote_state` data
//! sources in the init file.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tflayout_model::MemoryModule;
//! use tflayout_rules::{ModuleLayoutRule, Rule};
//!
//! // Snapshot handed over by the host (parser, test fixture, ...)
//! let module: MemoryModule = host.snapshot()?;
//!
//! let rule = ModuleLayoutRule::new();
//! for diagnostic in rule.check(&module)? {
//!     println!("{}", diagnostic);
//! }
//! ```

pub mod error;
pub mod policy;
pub mod rule;
pub mod severity;
pub mod structure;

pub use error::{RuleError, RuleResult};
pub use policy::LayoutPolicy;
pub use rule::Rule;
pub use severity::Severity;
pub use structure::ModuleLayoutRule;
