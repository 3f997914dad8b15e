//! Info operation - project information.

use modelgen_codegen::{
    GeneratorConfig, pipeline::phases::ValidatePhase, resolve::is_standard_column,
};
use modelgen_meta::{Catalog, ProjectFile};

use crate::reports::{InfoReport, TableSummary};

/// Execute the info operation.
///
/// Collects project information from the project file and the metadata.
pub fn info(project_file: &ProjectFile, catalog: &Catalog, config: &GeneratorConfig) -> InfoReport {
    let tables = catalog
        .iter()
        .map(|table| {
            let columns = &table.file.columns;
            TableSummary {
                name: table.name().to_string(),
                class_name: config.class_name(table.name()),
                columns: columns.len(),
                generated_columns: columns
                    .iter()
                    .filter(|c| !is_standard_column(&c.name))
                    .count(),
            }
        })
        .collect();

    let config_path = project_file.path();
    InfoReport {
        config_path: std::fs::canonicalize(config_path)
            .unwrap_or_else(|_| config_path.to_path_buf()),
        package: config.package.clone(),
        output_dir: project_file.output_dir(),
        tables_dir: project_file.tables_dir(),
        legacy: config.legacy,
        tables,
        lints: ValidatePhase::new()
            .lint_info()
            .into_iter()
            .map(|lint| (lint.name.to_string(), lint.description.to_string()))
            .collect(),
    }
}
