//! Metadata parsing from files and strings.

use std::path::{Path, PathBuf};

use crate::{Error, Result, SourceContext, TableFile, TableInfo};

/// Encoding of a metadata file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    Toml,
    Json,
}

impl MetadataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            ext if ext.eq_ignore_ascii_case("toml") => Some(Self::Toml),
            ext if ext.eq_ignore_ascii_case("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// A parsed metadata file together with its source, for error reporting.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub path: PathBuf,
    pub file: TableFile,
    source: SourceContext,
}

impl LoadedTable {
    /// Read and parse a metadata file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = MetadataFormat::from_path(path).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let source = SourceContext::new(content, path.display().to_string());
        let file = parse_table_file(&source, format)?;
        tracing::debug!(table = %file.name(), path = %path.display(), "parsed metadata");
        Ok(Self {
            path: path.to_path_buf(),
            file,
            source,
        })
    }

    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Validate the metadata, pointing errors into the file.
    pub fn table(&self) -> Result<TableInfo> {
        self.file
            .to_table()
            .map_err(|e| self.source.table_error(e))
    }
}

/// Parse metadata of the given format from a source context.
pub fn parse_table_file(source: &SourceContext, format: MetadataFormat) -> Result<TableFile> {
    match format {
        MetadataFormat::Toml => toml::from_str(source.src()).map_err(|e| source.toml_error(e)),
        MetadataFormat::Json => {
            serde_json::from_str(source.src()).map_err(|e| source.json_error(e))
        }
    }
}

/// Parse and validate TOML metadata.
pub fn parse_table_str(content: &str, filename: &str) -> Result<TableInfo> {
    parse_table_str_as(content, filename, MetadataFormat::Toml)
}

/// Parse and validate metadata in the given format.
pub fn parse_table_str_as(
    content: &str,
    filename: &str,
    format: MetadataFormat,
) -> Result<TableInfo> {
    let source = SourceContext::new(content, filename);
    let file = parse_table_file(&source, format)?;
    file.to_table().map_err(|e| source.table_error(e))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use modelgen_core::{AccessLevel, DisplayType};
    use tempfile::TempDir;

    use super::*;

    const INVOICE: &str = r#"
[table]
name = "C_Invoice"
access_level = 3

[[columns]]
name = "C_Invoice_ID"
display_type = "ID"
key = true
updatable = false

[[columns]]
name = "DocumentNo"
seq_no = 1
display_type = "String"
identifier = true

[[columns]]
name = "DocStatus"
display_type = "List"
reference_id = 131

[columns.list]
name = "_Document Status"
items = [{ value = "DR", name = "Drafted" }, "CO"]
"#;

    #[test]
    fn test_parse_toml() {
        let table = parse_table_str(INVOICE, "C_Invoice.toml").unwrap();

        assert_eq!(table.name(), "C_Invoice");
        assert_eq!(table.access_level(), AccessLevel::ClientOrganization);
        assert_eq!(table.columns().len(), 3);

        let id = &table.columns()[0];
        assert_eq!(id.display_type, DisplayType::Id);
        assert!(id.key);
        assert!(!id.updatable);

        let status = table.column("DocStatus").unwrap();
        assert_eq!(status.reference_id, Some(131));
        assert_eq!(status.list_items().len(), 2);
        assert_eq!(status.list_items()[1].name, "CO");
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "table": { "name": "C_Currency", "access_level": "system" },
            "columns": [
                { "name": "C_Currency_ID", "display_type": 13, "key": true },
                { "name": "ISO_Code", "display_type": "String", "seq_no": 1, "identifier": true }
            ]
        }"#;

        let table = parse_table_str_as(json, "C_Currency.json", MetadataFormat::Json).unwrap();

        assert_eq!(table.access_level(), AccessLevel::SystemOnly);
        assert_eq!(table.columns()[0].display_type, DisplayType::Id);
        assert_eq!(table.primary_identifier().unwrap().name, "ISO_Code");
    }

    #[test]
    fn test_toml_and_json_agree() {
        let from_toml = parse_table_str(INVOICE, "C_Invoice.toml").unwrap();
        let json = serde_json::to_string(&TableFile::from(&from_toml)).unwrap();
        let from_json = parse_table_str_as(&json, "C_Invoice.json", MetadataFormat::Json).unwrap();

        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_unknown_display_type() {
        let err = parse_table_str(
            r#"
[table]
name = "C_Order"

[[columns]]
name = "Foo"
display_type = "Hologram"
"#,
            "C_Order.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Toml { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_json_syntax_error_has_span() {
        let err = parse_table_str_as("{\n  \"table\": ", "broken.json", MetadataFormat::Json)
            .unwrap_err();
        assert!(matches!(*err, Error::Json { span: Some(_), .. }));
    }

    #[test]
    fn test_validation_error_points_at_column() {
        let content = r#"
[table]
name = "C_Order"

[[columns]]
name = "DocumentNo"
seq_no = 1
display_type = "String"
identifier = true

[[columns]]
name = "POReference"
seq_no = 1
display_type = "String"
identifier = true
"#;
        let err = parse_table_str(content, "C_Order.toml").unwrap_err();

        match *err {
            Error::Table {
                span: Some(span),
                source: modelgen_core::Error::DuplicatePrimaryIdentifier { .. },
                ..
            } => {
                assert_eq!(&content[span.offset()..span.offset() + span.len()], "POReference");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            MetadataFormat::from_path(Path::new("a/C_Order.toml")),
            Some(MetadataFormat::Toml)
        );
        assert_eq!(
            MetadataFormat::from_path(Path::new("C_Order.JSON")),
            Some(MetadataFormat::Json)
        );
        assert_eq!(MetadataFormat::from_path(Path::new("C_Order.xml")), None);
        assert_eq!(MetadataFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_loaded_table_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("C_Invoice.toml");
        fs::write(&path, INVOICE).unwrap();

        let loaded = LoadedTable::from_file(&path).unwrap();

        assert_eq!(loaded.name(), "C_Invoice");
        assert_eq!(loaded.table().unwrap().columns().len(), 3);
    }

    #[test]
    fn test_loaded_table_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("C_Invoice.yaml");
        fs::write(&path, "").unwrap();

        let err = LoadedTable::from_file(&path).unwrap_err();
        assert!(matches!(*err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_loaded_table_missing_file() {
        let err = LoadedTable::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
