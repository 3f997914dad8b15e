//! Column descriptors.

use modelgen_core::DisplayType;
use serde::{Deserialize, Serialize};

/// Description of a single table column.
///
/// Read-only once constructed; the builder-style `with_*` methods are meant
/// for assembling metadata in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default)]
    pub seq_no: i32,
    pub display_type: DisplayType,
    /// List or table reference of the column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<i32>,
    #[serde(default)]
    pub identifier: bool,
    #[serde(default)]
    pub key: bool,
    #[serde(default = "default_true")]
    pub updatable: bool,
    #[serde(default)]
    pub encrypted: bool,
    #[serde(default)]
    pub virtual_column: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListInfo>,
    /// Explicitly referenced table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_table: Option<String>,
    /// Companion column holding the table id of a generic reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id_column: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, display_type: DisplayType) -> Self {
        Self {
            name: name.into(),
            seq_no: 0,
            display_type,
            reference_id: None,
            identifier: false,
            key: false,
            updatable: true,
            encrypted: false,
            virtual_column: false,
            mandatory: false,
            default_value: None,
            list: None,
            ref_table: None,
            table_id_column: None,
        }
    }

    pub fn with_seq_no(mut self, seq_no: i32) -> Self {
        self.seq_no = seq_no;
        self
    }

    pub fn with_reference_id(mut self, reference_id: i32) -> Self {
        self.reference_id = Some(reference_id);
        self
    }

    pub fn identifier(mut self) -> Self {
        self.identifier = true;
        self
    }

    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.updatable = false;
        self
    }

    pub fn encrypted(mut self) -> Self {
        self.encrypted = true;
        self
    }

    pub fn virtual_column(mut self) -> Self {
        self.virtual_column = true;
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_list(mut self, list: ListInfo) -> Self {
        self.list = Some(list);
        self
    }

    pub fn with_ref_table(mut self, table: impl Into<String>) -> Self {
        self.ref_table = Some(table.into());
        self
    }

    pub fn with_table_id_column(mut self, column: impl Into<String>) -> Self {
        self.table_id_column = Some(column.into());
        self
    }

    /// Whether this column labels records of its table (`seq_no == 1` identifier).
    pub fn is_primary_identifier(&self) -> bool {
        self.seq_no == 1 && self.identifier
    }

    /// The reference id when it designates a list or table reference.
    pub fn positive_reference_id(&self) -> Option<i32> {
        self.reference_id.filter(|id| *id > 0)
    }

    /// List entries, empty when the column has no list.
    pub fn list_items(&self) -> &[ListItem] {
        self.list.as_ref().map(|l| l.items.as_slice()).unwrap_or(&[])
    }
}

/// Enumerated values of a list reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl ListInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            reference_id: None,
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, value: impl Into<String>, name: impl Into<String>) -> Self {
        self.items.push(ListItem::new(value, name));
        self
    }
}

/// A single list entry.
///
/// Metadata files may give an entry as a bare string, which is then both
/// value and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawListItem")]
pub struct ListItem {
    pub value: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListItem {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            description: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListItem {
    Value(String),
    Full {
        value: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl From<RawListItem> for ListItem {
    fn from(raw: RawListItem) -> Self {
        match raw {
            RawListItem::Value(value) => Self {
                name: value.clone(),
                value,
                description: None,
            },
            RawListItem::Full {
                value,
                name,
                description,
            } => Self {
                name: name.unwrap_or_else(|| value.clone()),
                value,
                description,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults() {
        let column: ColumnInfo = toml::from_str(
            r#"
            name = "Description"
            display_type = "String"
        "#,
        )
        .unwrap();

        assert_eq!(column, ColumnInfo::new("Description", DisplayType::String));
        assert!(column.updatable);
        assert!(!column.is_primary_identifier());
    }

    #[test]
    fn test_column_display_type_by_code() {
        let column: ColumnInfo = toml::from_str(
            r#"
            name = "C_BPartner_ID"
            display_type = 30
        "#,
        )
        .unwrap();

        assert_eq!(column.display_type, DisplayType::Search);
    }

    #[test]
    fn test_list_item_forms() {
        let list: ListInfo = toml::from_str(
            r#"
            name = "_Document Status"
            items = [
                { value = "DR", name = "Drafted", description = "Not yet processed" },
                { value = "IP" },
                "CO",
            ]
        "#,
        )
        .unwrap();

        assert_eq!(list.items[0].name, "Drafted");
        assert_eq!(list.items[0].description.as_deref(), Some("Not yet processed"));
        assert_eq!(list.items[1], ListItem::new("IP", "IP"));
        assert_eq!(list.items[2], ListItem::new("CO", "CO"));
    }

    #[test]
    fn test_primary_identifier() {
        let column = ColumnInfo::new("DocumentNo", DisplayType::String)
            .with_seq_no(1)
            .identifier();
        assert!(column.is_primary_identifier());

        let second = ColumnInfo::new("Name", DisplayType::String)
            .with_seq_no(2)
            .identifier();
        assert!(!second.is_primary_identifier());
    }

    #[test]
    fn test_positive_reference_id() {
        let column = ColumnInfo::new("DocAction", DisplayType::Button);
        assert_eq!(column.positive_reference_id(), None);
        assert_eq!(column.clone().with_reference_id(0).positive_reference_id(), None);
        assert_eq!(column.with_reference_id(135).positive_reference_id(), Some(135));
    }
}
