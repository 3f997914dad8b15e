//! The generated model class file.

use std::path::{Path, PathBuf};

use modelgen_codegen::{
    GeneratorConfig,
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::ImportSet,
    resolve::is_standard_column,
};
use modelgen_core::{AccessLevel, CHECKSUM_PLACEHOLDER, Error, GeneratedFile, Result};
use modelgen_meta::TableInfo;

use crate::{
    ast::{Method, Param},
    columns::ColumnAccessors,
    resolver::Resolver,
};

/// Comment at the top of every generated file.
pub const BANNER: &str = "// This file is generated by modelgen from table metadata. Manual changes are lost on regeneration.";

/// Prefix of the interface every model class implements.
const INTERFACE_PREFIX: &str = "I_";

/// Imports every model class needs for its constructors.
const BASE_IMPORTS: &[&str] = &["java.sql.ResultSet", "java.util.Properties"];

/// A model class for one table, ready to render.
#[derive(Debug, Clone)]
pub struct ModelClass {
    package: String,
    table_name: String,
    class_name: String,
    key_column: String,
    access_level: AccessLevel,
    legacy: bool,
    imports: ImportSet,
    members: Vec<CodeFragment>,
}

impl ModelClass {
    /// Resolve all columns of `table`.
    ///
    /// The body is assembled first so the imports it needs are known before
    /// the header is written.
    pub fn build(table: &TableInfo, config: &GeneratorConfig) -> Result<Self> {
        let resolver = Resolver::new(config);
        let mut imports = ImportSet::new(config.package.as_str());
        let mut members = Vec::new();
        let mut primary_identifier: Option<&str> = None;

        for column in table.columns() {
            if is_standard_column(&column.name) {
                continue;
            }

            let key_name_pair = if column.is_primary_identifier() {
                if let Some(first) = primary_identifier {
                    return Err(Error::DuplicatePrimaryIdentifier {
                        table: table.name().to_string(),
                        first: first.to_string(),
                        second: column.name.clone(),
                    });
                }
                primary_identifier = Some(column.name.as_str());
                config.legacy
            } else {
                false
            };

            let accessors = ColumnAccessors::new(column, &resolver, key_name_pair)?;
            if let Some(import) = accessors.resolved().import {
                imports.add(import);
            }
            members.extend(accessors.members());
        }

        for import in BASE_IMPORTS {
            imports.add(import);
        }

        tracing::debug!(
            table = table.name(),
            members = members.len(),
            imports = imports.len(),
            "assembled model class"
        );

        Ok(Self {
            package: config.package.clone(),
            table_name: table.name().to_string(),
            class_name: config.class_name(table.name()),
            key_column: config.key_column(table.name()),
            access_level: table.access_level(),
            legacy: config.legacy,
            imports,
            members,
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// File name relative to the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }

    fn class_header(&self) -> String {
        format!(
            "public class {} extends org.compiere.model.PO implements {}{}, org.compiere.model.I_Persistent",
            self.class_name, INTERFACE_PREFIX, self.table_name
        )
    }

    fn standard_constructor(&self) -> Method {
        Method::new(self.class_name.as_str())
            .doc("Standard Constructor")
            .param(Param::new("Properties", "ctx"))
            .param(Param::new("int", self.key_column.as_str()))
            .param(Param::new("String", "trxName"))
            .body_line(format!("super (ctx, {}, trxName);", self.key_column))
    }

    fn load_constructor(&self) -> Method {
        Method::new(self.class_name.as_str())
            .doc("Load Constructor")
            .param(Param::new("Properties", "ctx"))
            .param(Param::new("ResultSet", "rs"))
            .param(Param::new("String", "trxName"))
            .body_line("super (ctx, rs, trxName);")
    }

    fn access_level_method(&self) -> Method {
        Method::new("get_AccessLevel")
            .doc("AccessLevel")
            .doc(format!("@return {}", self.access_level.description()))
            .overrides()
            .protected()
            .returns("int")
            .body_line(format!("return {};", self.access_level.code()))
    }

    fn init_po_method(&self) -> Method {
        Method::new("initPO")
            .doc("Load Meta Data")
            .overrides()
            .protected()
            .returns("org.compiere.model.POInfo")
            .param(Param::new("Properties", "ctx"))
            .body_line("return org.compiere.model.POInfo.getPOInfo(Table_Name);")
    }

    fn class_body(&self) -> Vec<CodeFragment> {
        let mut body = vec![
            CodeFragment::blank(),
            CodeFragment::line(format!(
                "private static final long serialVersionUID = {}L;",
                CHECKSUM_PLACEHOLDER
            )),
        ];

        let mut members = vec![
            CodeFragment::sequence(self.standard_constructor().to_fragments()),
            CodeFragment::sequence(self.load_constructor().to_fragments()),
        ];
        if self.legacy {
            members.push(CodeFragment::sequence(self.access_level_method().to_fragments()));
        }
        members.push(CodeFragment::sequence(self.init_po_method().to_fragments()));
        members.extend(self.members.iter().cloned());

        for member in members {
            body.push(CodeFragment::blank());
            body.push(member);
        }
        body
    }
}

impl Renderable for ModelClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::line(BANNER),
            CodeFragment::javadoc("Generated Model - DO NOT CHANGE"),
        ];
        if !self.package.is_empty() {
            fragments.push(CodeFragment::line(format!("package {};", self.package)));
            fragments.push(CodeFragment::blank());
        }
        fragments.extend(self.imports.to_fragments());
        fragments.push(CodeFragment::JavaDoc(vec![
            format!("Generated Model for {}", self.table_name),
            "@author modelgen (generated)".to_string(),
        ]));
        fragments.push(CodeFragment::line("@SuppressWarnings(\"javadoc\")"));
        fragments.push(CodeFragment::block(self.class_header(), self.class_body()));
        fragments
    }
}

impl GeneratedFile for ModelClass {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use modelgen_core::DisplayType;
    use modelgen_meta::ColumnInfo;

    use super::*;

    fn table(columns: Vec<ColumnInfo>) -> TableInfo {
        TableInfo::new("C_Tax", AccessLevel::ClientOrganization, columns).unwrap()
    }

    #[test]
    fn test_header() {
        let config = GeneratorConfig::new("de.metas.tax.model");
        let class = ModelClass::build(&table(vec![]), &config).unwrap();
        let content = class.render();

        assert!(content.starts_with(&format!(
            "{}\n/** Generated Model - DO NOT CHANGE */\npackage de.metas.tax.model;\n\nimport java.sql.ResultSet;\nimport java.util.Properties;\n\n",
            BANNER
        )));
        assert!(content.contains(
            "@SuppressWarnings(\"javadoc\")\npublic class X_C_Tax extends org.compiere.model.PO implements I_C_Tax, org.compiere.model.I_Persistent\n{\n\n    private static final long serialVersionUID = [*serialVersionUID*]L;\n"
        ));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn test_constructors() {
        let config = GeneratorConfig::new("de.metas.tax.model");
        let class = ModelClass::build(&table(vec![]), &config).unwrap();
        let content = class.render();

        assert!(content.contains(
            "    /** Standard Constructor */\n    public X_C_Tax(Properties ctx, int C_Tax_ID, String trxName)\n    {\n        super (ctx, C_Tax_ID, trxName);\n    }\n"
        ));
        assert!(content.contains(
            "    /** Load Constructor */\n    public X_C_Tax(Properties ctx, ResultSet rs, String trxName)\n    {\n        super (ctx, rs, trxName);\n    }\n"
        ));
        assert!(content.contains(
            "    @Override\n    protected org.compiere.model.POInfo initPO(Properties ctx)\n    {\n        return org.compiere.model.POInfo.getPOInfo(Table_Name);\n    }\n"
        ));
    }

    #[test]
    fn test_access_level_only_in_legacy_mode() {
        let config = GeneratorConfig::new("de.metas.tax.model");
        let class = ModelClass::build(&table(vec![]), &config).unwrap();
        assert!(!class.render().contains("get_AccessLevel"));

        let class = ModelClass::build(&table(vec![]), &config.legacy(true)).unwrap();
        assert!(class.render().contains(
            "    /**\n     * AccessLevel\n     * @return 3 - Client - Org\n     */\n    @Override\n    protected int get_AccessLevel()\n    {\n        return 3;\n    }\n"
        ));
    }

    #[test]
    fn test_body_imports() {
        let config = GeneratorConfig::new("de.metas.tax.model");
        let class = ModelClass::build(
            &table(vec![
                ColumnInfo::new("Rate", DisplayType::Number),
                ColumnInfo::new("ValidFrom", DisplayType::Date),
            ]),
            &config,
        )
        .unwrap();
        let imports: Vec<&str> = class.imports().iter().collect();
        assert_eq!(
            imports,
            ["java.math.BigDecimal", "java.sql.ResultSet", "java.sql.Timestamp", "java.util.Properties"]
        );
    }

    #[test]
    fn test_custom_class_prefix() {
        let config = GeneratorConfig::new("de.metas.tax.model").with_class_prefix("Y_");
        let class = ModelClass::build(&table(vec![]), &config).unwrap();
        assert_eq!(class.file_name(), "Y_C_Tax.java");
        assert_eq!(class.path(Path::new("out")), Path::new("out").join("Y_C_Tax.java"));
        assert!(class.render().contains("public Y_C_Tax(Properties ctx, ResultSet rs, String trxName)"));
    }
}
