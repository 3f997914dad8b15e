//! Per-column resolution of Java types and relationship accessors.

use modelgen_codegen::{
    GeneratorConfig,
    language::TypeMapper,
    resolve::{self, GENERIC_REFERENCE_FIELD},
};
use modelgen_core::{Error, Result, ValueClass};
use modelgen_meta::ColumnInfo;

use crate::JavaTypeMapper;

/// A typed relationship accessor pair (`getC_Currency()` / `setC_Currency(..)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedReference {
    pub field_name: String,
    pub class_name: String,
}

/// Everything the emitters need to know about one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub value_class: ValueClass,
    /// Java type of the scalar accessors (e.g., `int`, `BigDecimal`)
    pub data_type: &'static str,
    /// Import the data type needs
    pub import: Option<&'static str>,
    pub reference: Option<TypedReference>,
    /// Field name of a generic reference accessor pair
    pub generic_reference: Option<String>,
}

/// Resolves columns against a generator configuration.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a GeneratorConfig,
    mapper: JavaTypeMapper,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            mapper: JavaTypeMapper,
        }
    }

    pub fn config(&self) -> &'a GeneratorConfig {
        self.config
    }

    /// Class name typed accessors of `column` refer to, if any.
    pub fn reference_class_name(&self, column: &ColumnInfo) -> Option<String> {
        resolve::referenced_table(column)
            .map(|table| format!("{}{}", self.config.reference_class_prefix, table))
    }

    pub fn resolve(&self, column: &ColumnInfo) -> Result<ResolvedColumn> {
        let value_class = resolve::value_class(column);
        let mut resolved = ResolvedColumn {
            value_class,
            data_type: self.mapper.map_value_class(value_class),
            import: self.mapper.import_for(value_class),
            reference: None,
            generic_reference: None,
        };

        // A table-id companion makes the column generic whatever its display type.
        if column.table_id_column.is_some() {
            let field = resolve::field_name(&column.name).unwrap_or_default();
            if field != GENERIC_REFERENCE_FIELD {
                return Err(Error::GenericReferenceName {
                    column: column.name.clone(),
                    field,
                });
            }
            resolved.generic_reference = Some(field);
            return Ok(resolved);
        }

        if !resolve::is_reference(column) {
            return Ok(resolved);
        }

        if let (Some(field_name), Some(class_name)) = (
            resolve::field_name(&column.name),
            self.reference_class_name(column),
        )
        {
            if self.config.references.allows(&class_name) {
                resolved.reference = Some(TypedReference {
                    field_name,
                    class_name,
                });
            } else {
                tracing::trace!(column = %column.name, class = %class_name, "reference not allowed");
            }
        }
        Ok(resolved)
    }
}
