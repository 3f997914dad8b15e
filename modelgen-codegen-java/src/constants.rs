//! Constants for columns restricted to a fixed list of values.

use std::collections::HashSet;

use modelgen_codegen::builder::{CodeFragment, Renderable};
use modelgen_core::{ValueClass, java_identifier, to_constant_case};
use modelgen_meta::ColumnInfo;

use crate::ast::Constant;

/// The reference id constant and one `String` constant per list item.
#[derive(Debug, Clone)]
pub struct ListConstants {
    constants: Vec<Constant>,
}

impl ListConstants {
    /// Constants for `column`, if it is a string list with a reference.
    pub fn for_column(column: &ColumnInfo, value_class: ValueClass) -> Option<Self> {
        let reference_id = column.positive_reference_id()?;
        let items = column.list_items();
        if value_class != ValueClass::String || items.is_empty() {
            return None;
        }

        let prefix = to_constant_case(&column.name);
        let mut reference = Constant::int(format!("{}_AD_Reference_ID", prefix), reference_id)
            .doc(format!("{} AD_Reference_ID={}", column.name, reference_id));
        if let Some(list) = column.list.as_ref().filter(|l| !l.name.is_empty()) {
            reference = reference.doc(format!("Reference name: {}", list.name));
        }

        let mut constants = vec![reference];
        let mut seen = HashSet::new();
        for item in items {
            let mut name = format!("{}_{}", prefix, item_identifier(&item.name, &item.value));
            if !seen.insert(name.clone()) {
                name = format!("{}_{}", name, java_identifier(&item.value));
                seen.insert(name.clone());
            }
            let label = if item.name.is_empty() { &item.value } else { &item.name };
            constants.push(
                Constant::string(name, &item.value).doc(format!("{} = {}", label, item.value)),
            );
        }

        Some(Self { constants })
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }
}

impl Renderable for ListConstants {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.constants.iter().flat_map(Renderable::to_fragments).collect()
    }
}

fn item_identifier(name: &str, value: &str) -> String {
    let ident = java_identifier(name);
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        java_identifier(value)
    } else {
        ident
    }
}
