//! Lint for lists on columns that do not hold strings.

use modelgen_core::ValueClass;
use modelgen_meta::TableFile;

use super::super::Lint;
use crate::{pipeline::Diagnostic, resolve};

/// Lint that warns about list values that will not get constants.
pub struct ListTypeLint;

impl Lint for ListTypeLint {
    fn name(&self) -> &'static str {
        "list-type"
    }

    fn description(&self) -> &'static str {
        "Warn about lists that produce no constants"
    }

    fn check(&self, table: &TableFile, diagnostics: &mut Vec<Diagnostic>) {
        for column in table.columns.iter().filter(|c| !c.list_items().is_empty()) {
            let class = resolve::value_class(column);
            let message = if class != ValueClass::String {
                format!(
                    "list on {} column '{}' produces no constants",
                    class, column.name
                )
            } else if column.positive_reference_id().is_none() {
                format!(
                    "list on column '{}' produces no constants without a reference_id",
                    column.name
                )
            } else {
                continue;
            };
            diagnostics.push(Diagnostic::warning(self.name(), message).at(&column.name));
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
    fn test_list_on_integer_column() {
        let table = table(
            r#"
            [table]
            name = "C_Order"

            [[columns]]
            name = "Priority"
            display_type = "Integer"
            reference_id = 154
            list = { name = "_PriorityRule", items = ["1", "3", "5"] }
        "#,
        );

        let mut diagnostics = Vec::new();
        ListTypeLint.check(&table, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("integer"));
    }

    #[test]
    fn test_list_without_reference_id() {
        let table = table(
            r#"
            [table]
            name = "C_Order"

            [[columns]]
            name = "DocStatus"
            display_type = "List"
            list = { items = ["DR", "CO"] }
        "#,
        );

        let mut diagnostics = Vec::new();
        ListTypeLint.check(&table, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("reference_id"));
    }

    #[test]
    fn test_string_list_is_fine() {
        let table = table(
            r#"
            [table]
            name = "C_Order"

            [[columns]]
            name = "DocStatus"
            display_type = "List"
            reference_id = 131
            list = { items = ["DR", "CO"] }
        "#,
        );

        let mut diagnostics = Vec::new();
        ListTypeLint.check(&table, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
