//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over every table and collects diagnostics

mod validate;

pub use validate::{
    DuplicateColumnLint, DuplicateIdentifierLint, EmptyTableLint, GenericReferenceLint, Lint,
    LintInfo, ListTypeLint, UnresolvedReferenceLint, ValidatePhase,
};
