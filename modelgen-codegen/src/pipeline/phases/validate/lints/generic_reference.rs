//! Lint for generic reference columns.

use modelgen_meta::TableFile;

use super::super::Lint;
use crate::{
    pipeline::Diagnostic,
    resolve::{self, GENERIC_REFERENCE_FIELD},
};

/// Lint that errors on generic reference columns not named `Record_ID`.
pub struct GenericReferenceLint;

impl Lint for GenericReferenceLint {
    fn name(&self) -> &'static str {
        "generic-reference"
    }

    fn description(&self) -> &'static str {
        "Check that generic reference columns derive the field name 'Record'"
    }

    fn check(&self, table: &TableFile, diagnostics: &mut Vec<Diagnostic>) {
        for column in table.columns.iter().filter(|c| c.table_id_column.is_some()) {
            let field = resolve::field_name(&column.name);
            if field.as_deref() != Some(GENERIC_REFERENCE_FIELD) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "generic reference column '{}' must be named 'Record_ID'",
                            column.name
                        ),
                    )
                    .at(&column.name),
                );
            }
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
    fn test_record_id_is_fine() {
        let table = table(
            r#"
            [table]
            name = "AD_Attachment"

            [[columns]]
            name = "Record_ID"
            display_type = "Search"
            table_id_column = "AD_Table_ID"
        "#,
        );

        let mut diagnostics = Vec::new();
        GenericReferenceLint.check(&table, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_other_name_is_error() {
        let table = table(
            r#"
            [table]
            name = "AD_Attachment"

            [[columns]]
            name = "Target_ID"
            display_type = "Search"
            table_id_column = "AD_Table_ID"
        "#,
        );

        let mut diagnostics = Vec::new();
        GenericReferenceLint.check(&table, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Target_ID"));
    }

    #[test]
    fn test_button_column_is_checked() {
        let table = table(
            r#"
            [table]
            name = "AD_Attachment"

            [[columns]]
            name = "Record_ID"
            display_type = "Button"
            table_id_column = "AD_Table_ID"

            [[columns]]
            name = "Target_ID"
            display_type = "Button"
            table_id_column = "AD_Table_ID"
        "#,
        );

        let mut diagnostics = Vec::new();
        GenericReferenceLint.check(&table, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Target_ID"));
    }
}
