//! Generate operation - model classes from table metadata.

use std::path::Path;

use modelgen_codegen::{
    GeneratorConfig,
    pipeline::{CheckContext, Pipeline},
};
use modelgen_codegen_java::{LanguageCodegen, ModelClassGenerator};
use modelgen_meta::LoadedTable;

use crate::reports::{GenerateReport, TableOutcome};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the classes are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every table is generated independently; a failing table is reported and
/// does not stop the others.
pub fn generate(
    tables: &[&LoadedTable],
    config: &GeneratorConfig,
    opts: GenerateOptions,
) -> GenerateReport {
    let warnings = lint_warnings(tables);

    let outcomes = tables
        .iter()
        .map(|table| generate_table(table, config, &opts))
        .collect();

    GenerateReport {
        output_dir: opts.output_dir.to_path_buf(),
        dry_run: opts.dry_run,
        warnings,
        outcomes,
    }
}

fn generate_table(table: &LoadedTable, config: &GeneratorConfig, opts: &GenerateOptions) -> TableOutcome {
    let name = table.name().to_string();
    let info = match table.table() {
        Ok(info) => info,
        Err(e) => {
            return TableOutcome::Failed {
                table: name,
                error: format!("{:?}", miette::Report::new(*e)),
            };
        }
    };

    let generator = ModelClassGenerator::new(&info, config);
    let result = if opts.dry_run {
        generator.preview().map(|file| TableOutcome::Preview {
            table: name.clone(),
            path: file.path,
            content: file.content,
        })
    } else {
        generator
            .generate(opts.output_dir)
            .map(|written| TableOutcome::Written {
                table: name.clone(),
                size_kb: written.size_kb(),
                path: written.path,
            })
    };

    result.unwrap_or_else(|e| {
        tracing::error!(table = %name, error = %e, "generation failed");
        TableOutcome::Failed {
            table: name,
            error: format!("{:?}", miette::Report::new(e)),
        }
    })
}

/// Warnings the lints report for the tables about to be generated.
///
/// Errors surface again as generation failures of their tables.
fn lint_warnings(tables: &[&LoadedTable]) -> Vec<String> {
    let mut ctx = CheckContext::new(tables.iter().map(|t| t.file.clone()).collect());
    if let Err(e) = Pipeline::new().run(&mut ctx) {
        tracing::debug!(error = %e, "metadata has errors");
    }
    ctx.warnings()
        .map(|d| match (&d.table, &d.location) {
            (Some(table), Some(column)) => format!("{}.{}: {}", table, column, d.message),
            (Some(table), None) => format!("{}: {}", table, d.message),
            _ => d.message.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use modelgen_meta::Catalog;
    use tempfile::TempDir;

    use super::*;

    fn catalog(dir: &Path) -> Catalog {
        fs::write(
            dir.join("C_Order.toml"),
            "[table]\nname = \"C_Order\"\n\n[[columns]]\nname = \"DocumentNo\"\ndisplay_type = \"String\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("AD_Note.toml"),
            "[table]\nname = \"AD_Note\"\n\n[[columns]]\nname = \"Target_ID\"\ndisplay_type = \"Search\"\ntable_id_column = \"AD_Table_ID\"\n",
        )
        .unwrap();
        Catalog::load_dir(dir).unwrap()
    }

    #[test]
    fn test_failures_are_isolated() {
        let metadata = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let catalog = catalog(metadata.path());
        let tables = catalog.select(&[]).unwrap();
        let config = GeneratorConfig::new("de.metas.model");

        let report = generate(
            &tables,
            &config,
            GenerateOptions {
                output_dir: output.path(),
                dry_run: false,
            },
        );

        assert!(report.has_failures());
        assert_eq!(report.outcomes.len(), 2);
        assert!(output.path().join("X_C_Order.java").exists());
        assert!(!output.path().join("X_AD_Note.java").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let metadata = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let catalog = catalog(metadata.path());
        let tables = catalog.select(&["C_Order".to_string()]).unwrap();
        let config = GeneratorConfig::new("de.metas.model");

        let report = generate(
            &tables,
            &config,
            GenerateOptions {
                output_dir: output.path(),
                dry_run: true,
            },
        );

        assert!(!report.has_failures());
        assert!(matches!(
            &report.outcomes[0],
            TableOutcome::Preview { content, .. } if content.contains("public class X_C_Order")
        ));
        assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
    }
}
