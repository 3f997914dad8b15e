//! Lint for duplicate column detection.

use std::collections::HashSet;

use modelgen_meta::TableFile;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on columns declared twice.
pub struct DuplicateColumnLint;

impl Lint for DuplicateColumnLint {
    fn name(&self) -> &'static str {
        "duplicate-column"
    }

    fn description(&self) -> &'static str {
        "Detect columns declared more than once"
    }

    fn check(&self, table: &TableFile, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for column in &table.columns {
            if !seen.insert(column.name.as_str()) && reported.insert(column.name.as_str()) {
                diagnostics.push(
                    Diagnostic::error(self.name(), format!("duplicate column '{}'", column.name))
                        .at(&column.name),
                );
            }
        }
    }
}
