use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors of a single table's generation run.
///
/// Configuration errors indicate bad input metadata; I/O errors indicate the
/// destination file could not be produced. Neither is retried.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("table name must not be empty")]
    #[diagnostic(code(modelgen::empty_table_name))]
    EmptyTableName,

    #[error("more than one primary identifier found in '{table}': '{first}' and '{second}'")]
    #[diagnostic(
        code(modelgen::duplicate_identifier),
        help("only one column per table may have seq_no = 1 and identifier = true")
    )]
    DuplicatePrimaryIdentifier {
        table: String,
        first: String,
        second: String,
    },

    #[error("duplicate column '{column}' in '{table}'")]
    #[diagnostic(code(modelgen::duplicate_column))]
    DuplicateColumn { table: String, column: String },

    #[error("generic reference column '{column}' derives field name '{field}', expected 'Record'")]
    #[diagnostic(
        code(modelgen::generic_reference_name),
        help("generic reference columns pair a table id column with a column named 'Record_ID'")
    )]
    GenericReferenceName { column: String, field: String },

    #[error("expected exactly one checksum placeholder in '{path}', found {count}")]
    #[diagnostic(code(modelgen::checksum_placeholder))]
    ChecksumPlaceholder { path: PathBuf, count: usize },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(modelgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error stems from bad metadata rather than the filesystem.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::Io { .. })
    }
}
