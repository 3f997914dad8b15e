//! Shared code generation utilities for the modelgen model class generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `modelgen-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`config`] - Generator configuration and reference policy
//! - [`generation`] - Output management (ImportSet)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)
//! - [`pipeline`] - Metadata checks (Pipeline, lints, diagnostics)
//! - [`resolve`] - Typing and naming rules derived from column metadata

pub mod builder;
pub mod config;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod resolve;

pub use config::{DEFAULT_ZERO_ID_COLUMNS, GeneratorConfig, ReferencePolicy};
