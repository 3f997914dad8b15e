//! Naming and typing rules derived from column metadata.
//!
//! These rules depend only on metadata, so lints and language generators
//! share them.

use modelgen_core::{DisplayType, ValueClass};
use modelgen_meta::ColumnInfo;

/// Columns every table has, whose accessors the persistence base class provides.
pub const STANDARD_COLUMNS: &[&str] = &[
    "AD_Client_ID",
    "AD_Org_ID",
    "IsActive",
    "Created",
    "CreatedBy",
    "Updated",
    "UpdatedBy",
];

/// Field name generic references (`Record_ID` plus a table-id column) are exposed under.
pub const GENERIC_REFERENCE_FIELD: &str = "Record";

/// Reference id of the posting button, whose value is a status code.
const POSTED_BUTTON_REFERENCE_ID: i32 = 234;

pub fn is_standard_column(column_name: &str) -> bool {
    STANDARD_COLUMNS.contains(&column_name)
}

/// Value class a column holds.
///
/// Column-name conventions take precedence over the display type.
pub fn value_class(column: &ColumnInfo) -> ValueClass {
    let name = column.name.as_str();
    let display_type = column.display_type;

    if matches!(name, "AD_Language" | "EntityType") {
        return ValueClass::String;
    }
    if matches!(name, "Posted" | "Processed" | "Processing") {
        let status_button = display_type == DisplayType::Button
            && column.reference_id == Some(POSTED_BUTTON_REFERENCE_ID);
        return if status_button {
            ValueClass::String
        } else {
            ValueClass::Boolean
        };
    }
    if name == "Record_ID" {
        return ValueClass::Integer;
    }
    if display_type == DisplayType::Button {
        if column.positive_reference_id().is_some() {
            return ValueClass::String;
        }
        if name.ends_with("_ID") {
            return ValueClass::Integer;
        }
    }
    if (!column.key && name.ends_with("_ID")) || name.ends_with("_ID_To") || name.ends_with("_ID_From")
    {
        return ValueClass::Integer;
    }
    display_type.value_class()
}

/// Name of the relationship a foreign-key column establishes.
///
/// `C_BPartner_ID` -> `C_BPartner`, `C_Period_ID_To` -> `C_Period_To`.
pub fn field_name(column_name: &str) -> Option<String> {
    if let Some(base) = column_name.strip_suffix("_ID_To") {
        return Some(format!("{}_To", base));
    }
    column_name
        .strip_suffix("_ID")
        .filter(|base| !base.is_empty())
        .map(str::to_string)
}

/// Table a display type always refers to.
pub fn fixed_table(display_type: DisplayType) -> Option<&'static str> {
    match display_type {
        DisplayType::Location => Some("C_Location"),
        DisplayType::Locator => Some("M_Locator"),
        DisplayType::Account => Some("C_ValidCombination"),
        DisplayType::PAttribute => Some("M_AttributeSetInstance"),
        DisplayType::Image => Some("AD_Image"),
        DisplayType::Color => Some("AD_Color"),
        DisplayType::Assignment => Some("S_ResourceAssignment"),
        _ => None,
    }
}

/// Table a foreign-key column refers to, if it can be determined.
pub fn referenced_table(column: &ColumnInfo) -> Option<String> {
    if let Some(table) = column.ref_table.as_deref().filter(|t| !t.is_empty()) {
        return Some(table.to_string());
    }
    if let Some(table) = fixed_table(column.display_type) {
        return Some(table.to_string());
    }
    match column.display_type {
        DisplayType::TableDir | DisplayType::Search | DisplayType::Id => {
            key_table(&column.name).map(str::to_string)
        }
        _ => None,
    }
}

/// Table whose key column is `column_name` (`C_Period_ID_To` -> `C_Period`).
fn key_table(column_name: &str) -> Option<&str> {
    column_name
        .strip_suffix("_ID")
        .or_else(|| column_name.rsplit_once("_ID_").map(|(base, _)| base))
        .filter(|base| !base.is_empty())
}

/// Whether a column refers to another record through a typed accessor pair.
pub fn is_reference(column: &ColumnInfo) -> bool {
    column.display_type.is_id() && !column.key
}
