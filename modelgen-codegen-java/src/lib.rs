//! Java model class generator for modelgen.
//!
//! Turns a [`TableInfo`](modelgen_meta::TableInfo) into the source of its
//! `X_<Table>` persistence class.

mod class;
mod columns;
mod constants;
mod generator;
mod resolver;
mod type_mapper;

pub mod ast;

pub use class::{BANNER, ModelClass};
pub use columns::{AccessorRules, ColumnAccessors, Storage};
pub use constants::ListConstants;
pub use generator::ModelClassGenerator;
pub use modelgen_codegen::language::{LanguageCodegen, PreviewFile};
pub use modelgen_codegen::resolve::GENERIC_REFERENCE_FIELD;
pub use resolver::{ResolvedColumn, Resolver, TypedReference};
pub use type_mapper::JavaTypeMapper;
