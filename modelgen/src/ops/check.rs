//! Check operation - metadata validation.

use std::path::Path;

use eyre::Result;
use modelgen_codegen::pipeline::{CheckContext, Pipeline, Severity};
use modelgen_meta::Catalog;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline over every table and returns its diagnostics.
pub fn check(catalog: &Catalog, config_path: &Path) -> Result<CheckReport> {
    let mut ctx = CheckContext::new(catalog.iter().map(|t| t.file.clone()).collect());
    let result = Pipeline::new().run(&mut ctx);
    // A failure without diagnostics did not come from a lint
    if !ctx.has_errors() {
        result?;
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let location = match (&diag.table, &diag.location) {
            (Some(table), Some(column)) => Some(format!("{}.{}", table, column)),
            (Some(table), None) => Some(table.clone()),
            (None, _) => None,
        };
        let msg = match location {
            Some(loc) => format!("{} [{}]\n  --> {}", diag.message, diag.lint, loc),
            None => format!("{} [{}]", diag.message, diag.lint),
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        table_count: catalog.len(),
        errors,
        warnings,
        infos,
    })
}
