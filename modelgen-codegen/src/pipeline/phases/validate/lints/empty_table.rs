//! Lint for tables without generated accessors.

use modelgen_meta::TableFile;

use super::super::Lint;
use crate::{pipeline::Diagnostic, resolve};

/// Lint that warns about tables with only standard columns.
pub struct EmptyTableLint;

impl Lint for EmptyTableLint {
    fn name(&self) -> &'static str {
        "empty-table"
    }

    fn description(&self) -> &'static str {
        "Warn about tables that declare no columns besides the standard ones"
    }

    fn check(&self, table: &TableFile, diagnostics: &mut Vec<Diagnostic>) {
        let own_columns = table
            .columns
            .iter()
            .filter(|c| !resolve::is_standard_column(&c.name))
            .count();
        if own_columns == 0 {
            diagnostics.push(Diagnostic::warning(
                self.name(),
                format!("table '{}' declares no own columns", table.name()),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(content: &str) -> TableFile {
        toml::from_str(content).expect("Failed to parse test table")
    }

    #[test]
    fn test_only_standard_columns() {
        let table = table(
            r#"
            [table]
            name = "C_Order"

            [[columns]]
            name = "AD_Client_ID"
            display_type = "TableDir"

            [[columns]]
            name = "IsActive"
            display_type = "YesNo"
        "#,
        );

        let mut diagnostics = Vec::new();
        EmptyTableLint.check(&table, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_own_column() {
        let table = table(
            r#"
            [table]
            name = "C_Order"

            [[columns]]
            name = "DocumentNo"
            display_type = "String"
        "#,
        );

        let mut diagnostics = Vec::new();
        EmptyTableLint.check(&table, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
