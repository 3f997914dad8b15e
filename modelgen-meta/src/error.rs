use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for metadata operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the text and filename of a metadata or project file so errors can
/// point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error, locating it by line and column.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Wrap a table validation error, pointing at the offending column.
    pub fn table_error(&self, source: modelgen_core::Error) -> Box<Error> {
        let span = match &source {
            modelgen_core::Error::DuplicatePrimaryIdentifier { second, .. } => {
                find_last_value_span(&self.src, second)
            }
            modelgen_core::Error::DuplicateColumn { column, .. } => {
                find_last_value_span(&self.src, column)
            }
            modelgen_core::Error::GenericReferenceName { column, .. } => {
                find_value_span(&self.src, column)
            }
            _ => None,
        };
        Box::new(Error::Table {
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(modelgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse metadata")]
    #[diagnostic(code(modelgen::parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse metadata")]
    #[diagnostic(code(modelgen::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported metadata file '{path}'")]
    #[diagnostic(
        code(modelgen::unsupported_format),
        help("metadata files must have a .toml or .json extension")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("{source}")]
    #[diagnostic(code(modelgen::invalid_table))]
    Table {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        source: modelgen_core::Error,
    },

    #[error("duplicate table '{name}'")]
    #[diagnostic(
        code(modelgen::duplicate_table),
        help("'{first}' and '{second}' both describe '{name}'")
    )]
    DuplicateTable {
        name: String,
        first: String,
        second: String,
    },

    #[error("unknown table '{name}'")]
    #[diagnostic(code(modelgen::unknown_table))]
    UnknownTable { name: String },

    #[error("{message}")]
    #[diagnostic(code(modelgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

/// Byte offset of a 1-based line and column.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some((offset + column.saturating_sub(1)).min(src.len()));
        }
        offset += text.len();
    }
    None
}

/// Find the span of a quoted value in the source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of the last occurrence of a quoted value.
pub(crate) fn find_last_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.rfind(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
