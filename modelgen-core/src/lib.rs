//! Core types and utilities for the modelgen model class generator.
//!
//! This crate provides the metadata vocabulary (display types, value
//! classes, access levels), the serialVersionUID checksum and the output
//! writer shared across the modelgen crates.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod checksum;
mod error;
mod file;
mod types;
mod utils;

pub use checksum::{CHECKSUM_PLACEHOLDER, apply_checksum, java_string_hash};
pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, WrittenFile, write_with_checksum};
// Fundamental types
pub use types::{AccessLevel, DisplayType, ValueClass};
// String utilities
pub use utils::{java_identifier, strip_prefix_ignore_case, to_constant_case};
