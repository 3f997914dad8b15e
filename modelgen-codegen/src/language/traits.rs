//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use modelgen_core::{Result, ValueClass, WrittenFile};

/// Trait for language-specific model class generators.
///
/// A generator is bound to one table and produces one source file for it.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Render the file without writing it to disk
    fn preview(&self) -> Result<PreviewFile>;

    /// Generate the file into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<WrittenFile>;
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// File content, checksum already substituted
    pub content: String,
}

/// Trait for mapping value classes to language-specific type names.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Type name used in generated signatures
    fn map_value_class(&self, class: ValueClass) -> &'static str;

    /// Fully qualified name to import for the type, if any
    fn import_for(&self, _class: ValueClass) -> Option<&'static str> {
        None
    }
}
