//! Lint for foreign keys whose referenced table cannot be determined.

use modelgen_meta::TableFile;

use super::super::Lint;
use crate::{pipeline::Diagnostic, resolve};

/// Lint that notes reference columns that will not get typed accessors.
pub struct UnresolvedReferenceLint;

impl Lint for UnresolvedReferenceLint {
    fn name(&self) -> &'static str {
        "unresolved-reference"
    }

    fn description(&self) -> &'static str {
        "Note reference columns whose referenced table cannot be determined"
    }

    fn check(&self, table: &TableFile, diagnostics: &mut Vec<Diagnostic>) {
        for column in table.columns.iter().filter(|c| resolve::is_reference(c)) {
            // generic references resolve through their table id column
            if column.table_id_column.is_some() {
                continue;
            }
            let reason = if resolve::field_name(&column.name).is_none() {
                "no field name can be derived from the column name"
            } else if resolve::referenced_table(column).is_none() {
                "the referenced table is unknown, set ref_table"
            } else {
                continue;
            };
            diagnostics.push(
                Diagnostic::info(
                    self.name(),
                    format!("no typed accessors for '{}': {}", column.name, reason),
                )
                .at(&column.name),
            );
        }
    }
}
