//! Directory of table metadata files.

use std::path::Path;

use indexmap::IndexMap;

use crate::{Error, LoadedTable, MetadataFormat, Result};

/// All tables of a metadata directory, keyed by table name in file-name order.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: IndexMap<String, LoadedTable>,
}

impl Catalog {
    /// Load every `.toml` and `.json` file of `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            if path.is_file() && MetadataFormat::from_path(&path).is_some() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut catalog = Self::default();
        for path in paths {
            catalog.insert(LoadedTable::from_file(&path)?)?;
        }
        tracing::debug!(dir = %dir.display(), tables = catalog.len(), "loaded metadata");
        Ok(catalog)
    }

    /// Add a table, rejecting a second file for the same table.
    pub fn insert(&mut self, table: LoadedTable) -> Result<()> {
        if let Some(existing) = self.tables.get(table.name()) {
            return Err(Box::new(Error::DuplicateTable {
                name: table.name().to_string(),
                first: existing.path.display().to_string(),
                second: table.path.display().to_string(),
            }));
        }
        self.tables.insert(table.name().to_string(), table);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&LoadedTable> {
        self.tables.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedTable> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The named tables in the given order, or every table when `names` is empty.
    pub fn select(&self, names: &[String]) -> Result<Vec<&LoadedTable>> {
        if names.is_empty() {
            return Ok(self.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.get(name).ok_or_else(|| {
                    Box::new(Error::UnknownTable {
                        name: name.clone(),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_table(dir: &Path, file: &str, table: &str) {
        fs::write(
            dir.join(file),
            format!(
                "[table]\nname = \"{table}\"\n\n[[columns]]\nname = \"{table}_ID\"\ndisplay_type = \"ID\"\nkey = true\n"
            ),
        )
        .unwrap();
    }

    #[test]
    fn test_load_dir_sorted_by_file_name() {
        let temp = TempDir::new().unwrap();
        write_table(temp.path(), "M_Product.toml", "M_Product");
        write_table(temp.path(), "C_Order.toml", "C_Order");
        fs::write(
            temp.path().join("C_Currency.json"),
            r#"{"table": {"name": "C_Currency"}, "columns": []}"#,
        )
        .unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let catalog = Catalog::load_dir(temp.path()).unwrap();

        let names: Vec<_> = catalog.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["C_Currency", "C_Order", "M_Product"]);
    }

    #[test]
    fn test_duplicate_table() {
        let temp = TempDir::new().unwrap();
        write_table(temp.path(), "a.toml", "C_Order");
        write_table(temp.path(), "b.toml", "C_Order");

        let err = Catalog::load_dir(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::DuplicateTable { ref name, .. } if name == "C_Order"));

        let help = miette::Diagnostic::help(&*err).map(|h| h.to_string()).unwrap();
        assert!(help.contains("a.toml' and '"), "{help}");
        assert!(help.ends_with("b.toml' both describe 'C_Order'"), "{help}");
    }

    #[test]
    fn test_select() {
        let temp = TempDir::new().unwrap();
        write_table(temp.path(), "C_Order.toml", "C_Order");
        write_table(temp.path(), "M_Product.toml", "M_Product");
        let catalog = Catalog::load_dir(temp.path()).unwrap();

        assert_eq!(catalog.select(&[]).unwrap().len(), 2);

        let picked = catalog.select(&["M_Product".to_string()]).unwrap();
        assert_eq!(picked[0].name(), "M_Product");

        let err = catalog.select(&["C_Invoice".to_string()]).unwrap_err();
        assert!(matches!(*err, Error::UnknownTable { .. }));
    }

    #[test]
    fn test_missing_dir() {
        let err = Catalog::load_dir("no/such/dir").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
