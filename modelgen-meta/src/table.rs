//! Table metadata.

use std::collections::HashSet;

use modelgen_core::{AccessLevel, Error};
use serde::{Deserialize, Serialize};

use crate::ColumnInfo;

/// Validated description of a table and its columns.
///
/// Columns keep their metadata order, which is the order accessors are
/// generated in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    name: String,
    access_level: AccessLevel,
    columns: Vec<ColumnInfo>,
}

impl TableInfo {
    /// Create a table, rejecting inconsistent metadata.
    pub fn new(
        name: impl Into<String>,
        access_level: AccessLevel,
        columns: Vec<ColumnInfo>,
    ) -> modelgen_core::Result<Self> {
        let name = name.into();
        validate_columns(&name, &columns)?;
        Ok(Self {
            name,
            access_level,
            columns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The column labelling records of this table, if any
    pub fn primary_identifier(&self) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.is_primary_identifier())
    }
}

fn validate_columns(table: &str, columns: &[ColumnInfo]) -> modelgen_core::Result<()> {
    if table.trim().is_empty() {
        return Err(Error::EmptyTableName);
    }

    let mut seen = HashSet::with_capacity(columns.len());
    let mut identifier: Option<&str> = None;
    for column in columns {
        if !seen.insert(column.name.as_str()) {
            return Err(Error::DuplicateColumn {
                table: table.to_string(),
                column: column.name.clone(),
            });
        }
        if column.is_primary_identifier() {
            if let Some(first) = identifier {
                return Err(Error::DuplicatePrimaryIdentifier {
                    table: table.to_string(),
                    first: first.to_string(),
                    second: column.name.clone(),
                });
            }
            identifier = Some(&column.name);
        }
    }
    Ok(())
}

/// `[table]` section of a metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSection {
    pub name: String,
    #[serde(default)]
    pub access_level: AccessLevel,
}

/// A metadata file as written, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFile {
    pub table: TableSection,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

impl TableFile {
    pub fn name(&self) -> &str {
        &self.table.name
    }

    /// Validate into a [`TableInfo`].
    pub fn to_table(&self) -> modelgen_core::Result<TableInfo> {
        TableInfo::new(
            self.table.name.clone(),
            self.table.access_level,
            self.columns.clone(),
        )
    }
}

impl From<&TableInfo> for TableFile {
    fn from(table: &TableInfo) -> Self {
        Self {
            table: TableSection {
                name: table.name.clone(),
                access_level: table.access_level,
            },
            columns: table.columns.clone(),
        }
    }
}
