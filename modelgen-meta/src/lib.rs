//! Table metadata for the modelgen model class generator.
//!
//! Metadata files describe one table each (TOML or JSON). A directory of
//! them forms a [`Catalog`]; the `modelgen.toml` [`ProjectFile`] says where
//! the directory is and how classes are generated from it.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod column;
mod error;
mod parse;
mod project;
mod table;

pub use catalog::Catalog;
pub use column::{ColumnInfo, ListInfo, ListItem};
pub use error::{Error, Result, SourceContext};
pub use parse::{LoadedTable, MetadataFormat, parse_table_file, parse_table_str, parse_table_str_as};
pub use project::{
    GeneratorSection, PROJECT_FILE, Project, ProjectFile, ReferencesSection, parse_project,
};
pub use table::{TableFile, TableInfo, TableSection};
