//! Lint for tables with more than one primary identifier.

use modelgen_meta::TableFile;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when several columns claim to label the table's records.
pub struct DuplicateIdentifierLint;

impl Lint for DuplicateIdentifierLint {
    fn name(&self) -> &'static str {
        "duplicate-identifier"
    }

    fn description(&self) -> &'static str {
        "Detect more than one column with seq_no 1 marked as identifier"
    }

    fn check(&self, table: &TableFile, diagnostics: &mut Vec<Diagnostic>) {
        let mut identifiers = table.columns.iter().filter(|c| c.is_primary_identifier());
        let Some(first) = identifiers.next() else {
            return;
        };
        for column in identifiers {
            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!(
                        "more than one primary identifier: '{}' (first was '{}')",
                        column.name, first.name
                    ),
                )
                .at(&column.name),
            );
        }
    }
}
