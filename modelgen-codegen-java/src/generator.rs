use std::path::{Path, PathBuf};

use modelgen_codegen::{
    GeneratorConfig,
    language::{LanguageCodegen, PreviewFile},
};
use modelgen_core::{Error, GeneratedFile, Result, WrittenFile, apply_checksum};
use modelgen_meta::TableInfo;

use crate::class::ModelClass;

/// Java code generator that produces one model class per table
pub struct ModelClassGenerator<'a> {
    table: &'a TableInfo,
    config: &'a GeneratorConfig,
}

impl LanguageCodegen for ModelClassGenerator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Result<PreviewFile> {
        let class = self.model_class()?;
        let path = PathBuf::from(class.file_name());
        let (content, _) =
            apply_checksum(&class.render()).map_err(|count| Error::ChecksumPlaceholder {
                path: path.clone(),
                count,
            })?;
        Ok(PreviewFile { path, content })
    }

    fn generate(&self, output_dir: &Path) -> Result<WrittenFile> {
        let class = self.model_class()?;
        tracing::debug!(
            table = self.table.name(),
            class = class.class_name(),
            "generating model class"
        );
        class.write(output_dir)
    }
}

impl<'a> ModelClassGenerator<'a> {
    pub fn new(table: &'a TableInfo, config: &'a GeneratorConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &TableInfo {
        self.table
    }

    /// Resolve the table into a renderable class.
    pub fn model_class(&self) -> Result<ModelClass> {
        ModelClass::build(self.table, self.config)
    }
}
