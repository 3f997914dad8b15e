//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Project file path.
    pub config_path: PathBuf,
    /// Package of the generated classes.
    pub package: String,
    /// Where classes are written.
    pub output_dir: PathBuf,
    /// Where table metadata is read from.
    pub tables_dir: PathBuf,
    /// Whether legacy members are generated.
    pub legacy: bool,
    /// Tables found in the metadata directory.
    pub tables: Vec<TableSummary>,
    /// Lints run by `modelgen check`, as (name, description).
    pub lints: Vec<(String, String)>,
}

/// Column statistics of one table.
#[derive(Debug)]
pub struct TableSummary {
    pub name: String,
    pub class_name: String,
    /// All columns.
    pub columns: usize,
    /// Columns that get accessors.
    pub generated_columns: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Project", &self.config_path.display().to_string());
        out.key_value("Package", &self.package);
        out.key_value("Metadata", &self.tables_dir.display().to_string());
        out.key_value("Output", &self.output_dir.display().to_string());
        out.key_value("Legacy", if self.legacy { "yes" } else { "no" });
        out.newline();

        if self.tables.is_empty() {
            out.preformatted("No tables found");
        } else {
            out.section(&format!("Tables ({})", self.tables.len()));
            for table in &self.tables {
                out.list_item(&format!(
                    "{} -> {}.java ({} columns, {} generated)",
                    table.name, table.class_name, table.columns, table.generated_columns
                ));
            }
        }

        out.newline();
        out.section("Lints");
        for (name, description) in &self.lints {
            out.list_item(&format!("{name}: {description}"));
        }
    }
}
