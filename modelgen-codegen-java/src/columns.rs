//! Accessor methods generated for each column.

use modelgen_codegen::{
    GeneratorConfig,
    builder::{CodeFragment, Renderable},
};
use modelgen_core::{DisplayType, Result, ValueClass, strip_prefix_ignore_case};
use modelgen_meta::ColumnInfo;

use crate::{
    ast::{Method, Param},
    constants::ListConstants,
    resolver::{ResolvedColumn, Resolver},
};

/// Persistence primitive a setter stores through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Value,
    ValueEncrypted,
    NoCheck,
    NoCheckEncrypted,
}

impl Storage {
    pub fn from_flags(updatable: bool, encrypted: bool) -> Self {
        match (updatable, encrypted) {
            (true, false) => Self::Value,
            (true, true) => Self::ValueEncrypted,
            (false, false) => Self::NoCheck,
            (false, true) => Self::NoCheckEncrypted,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::Value => "set_Value",
            Self::ValueEncrypted => "set_ValueE",
            Self::NoCheck => "set_ValueNoCheck",
            Self::NoCheckEncrypted => "set_ValueNoCheckE",
        }
    }
}

/// Independent switches deciding the shape of a column's setter and getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorRules {
    /// Setter throws instead of storing
    pub virtual_column: bool,
    /// Values below the floor are stored as null
    pub id_floor: Option<i32>,
    /// `is` getter prefix, boxed through `Boolean.valueOf`
    pub boolean: bool,
    /// Getter substitutes `BigDecimal.ZERO` for null
    pub fractional: bool,
    pub storage: Storage,
    /// Getter reads through the decrypting primitive
    pub encrypted: bool,
}

impl AccessorRules {
    pub fn for_column(column: &ColumnInfo, value_class: ValueClass, config: &GeneratorConfig) -> Self {
        let id_floor = (value_class == ValueClass::Integer
            && column.name.ends_with(&config.key_suffix))
        .then(|| config.id_floor(&column.name));

        Self {
            virtual_column: column.virtual_column,
            id_floor,
            boolean: value_class == ValueClass::Boolean,
            fractional: value_class == ValueClass::BigDecimal,
            storage: Storage::from_flags(column.updatable, column.encrypted),
            encrypted: column.encrypted,
        }
    }
}

/// Everything generated for one non-standard column.
#[derive(Debug, Clone)]
pub struct ColumnAccessors<'a> {
    column: &'a ColumnInfo,
    resolved: ResolvedColumn,
    rules: AccessorRules,
    key_name_pair: bool,
}

impl<'a> ColumnAccessors<'a> {
    /// Resolve `column`. `key_name_pair` adds the `getKeyNamePair()` accessor.
    pub fn new(column: &'a ColumnInfo, resolver: &Resolver<'_>, key_name_pair: bool) -> Result<Self> {
        let resolved = resolver.resolve(column)?;
        let rules = AccessorRules::for_column(column, resolved.value_class, resolver.config());
        Ok(Self {
            column,
            resolved,
            rules,
            key_name_pair,
        })
    }

    pub fn resolved(&self) -> &ResolvedColumn {
        &self.resolved
    }

    pub fn rules(&self) -> &AccessorRules {
        &self.rules
    }

    /// Class member declarations, in output order.
    ///
    /// Each member is a single fragment; the class separates them with
    /// blank lines.
    pub fn members(&self) -> Vec<CodeFragment> {
        let mut members = Vec::new();

        if self.key_name_pair {
            members.push(fragment(&self.key_name_pair_method()));
        }
        if let Some(constants) = ListConstants::for_column(self.column, self.resolved.value_class) {
            members.push(fragment(&constants));
        }
        if let Some(reference) = &self.resolved.reference {
            members.push(fragment(&self.typed_getter(&reference.class_name, &reference.field_name)));
            members.push(fragment(&self.typed_setter(&reference.class_name, &reference.field_name)));
        }
        if let Some(field) = &self.resolved.generic_reference {
            members.push(fragment(&generic_getter(field)));
            members.push(fragment(&generic_setter(field)));
        }
        members.push(fragment(&self.setter()));
        members.push(fragment(&self.getter()));
        members
    }

    fn column_constant(&self) -> String {
        format!("COLUMNNAME_{}", self.column.name)
    }

    pub fn getter_name(&self) -> String {
        let name = &self.column.name;
        if self.rules.boolean {
            format!("is{}", strip_prefix_ignore_case(name, "is").unwrap_or(name))
        } else {
            format!("get{}", name)
        }
    }

    fn key_name_pair_method(&self) -> Method {
        let value = if self.column.display_type == DisplayType::String {
            format!("{}()", self.getter_name())
        } else {
            format!("String.valueOf({}())", self.getter_name())
        };
        Method::new("getKeyNamePair")
            .doc("Get Record ID/ColumnName")
            .doc("@return ID/ColumnName pair")
            .returns("org.compiere.util.KeyNamePair")
            .body_line(format!(
                "return new org.compiere.util.KeyNamePair(get_ID(), {});",
                value
            ))
    }

    fn typed_getter(&self, class_name: &str, field: &str) -> Method {
        Method::new(format!("get{}", field))
            .overrides()
            .returns(class_name)
            .body_line(format!(
                "return get_ValueAsPO({}, {}.class);",
                self.column_constant(),
                class_name
            ))
    }

    fn typed_setter(&self, class_name: &str, field: &str) -> Method {
        Method::new(format!("set{}", field))
            .overrides()
            .returns("void")
            .param(Param::new(class_name, field))
            .body_line(format!(
                "set_ValueFromPO({}, {}.class, {});",
                self.column_constant(),
                class_name,
                field
            ))
    }

    fn setter(&self) -> Method {
        let name = &self.column.name;
        let method = Method::new(format!("set{}", name))
            .overrides()
            .returns("void")
            .param(Param::new(self.resolved.data_type, name));

        if self.rules.virtual_column {
            return method.body_line(format!(
                "throw new IllegalArgumentException (\"{} is virtual column\");",
                name
            ));
        }

        let store = self.rules.storage.method();
        let constant = self.column_constant();
        if let Some(floor) = self.rules.id_floor {
            return method
                .body_line(format!("if ({} < {})", name, floor))
                .body_nested(format!("{}({}, null);", store, constant))
                .body_line("else")
                .body_nested(format!("{}({}, Integer.valueOf({}));", store, constant, name));
        }

        let value = match self.resolved.value_class {
            ValueClass::Boolean => format!("Boolean.valueOf({})", name),
            ValueClass::Integer => format!("Integer.valueOf({})", name),
            _ => name.clone(),
        };
        method.body_line(format!("{}({}, {});", store, constant, value))
    }

    fn getter(&self) -> Method {
        let constant = self.column_constant();
        let data_type = self.resolved.data_type;
        let method = Method::new(self.getter_name())
            .overrides()
            .returns(data_type);
        let get_value = if self.rules.encrypted {
            "get_ValueE"
        } else {
            "get_Value"
        };

        match self.resolved.value_class {
            ValueClass::Integer => {
                method.body_line(format!("return get_ValueAsInt({});", constant))
            }
            ValueClass::BigDecimal if self.rules.fractional => method
                .body_line(format!("BigDecimal bd = get_ValueAsBigDecimal({});", constant))
                .body_line("return bd != null ? bd : BigDecimal.ZERO;"),
            ValueClass::Boolean => {
                method.body_line(format!("return get_ValueAsBoolean({});", constant))
            }
            ValueClass::Timestamp => {
                method.body_line(format!("return get_ValueAsTimestamp({});", constant))
            }
            ValueClass::Object => method.body_line(format!("return {}({});", get_value, constant)),
            _ => method.body_line(format!("return ({}){}({});", data_type, get_value, constant)),
        }
    }
}

fn generic_getter(field: &str) -> Method {
    Method::new(format!("get{}", field))
        .overrides()
        .type_params("RecordType")
        .returns("RecordType")
        .param(Param::new("Class<RecordType>", "recordType").final_())
        .body_line("return getReferencedRecord(recordType);")
}

fn generic_setter(field: &str) -> Method {
    Method::new(format!("set{}", field))
        .overrides()
        .type_params("RecordType")
        .returns("void")
        .param(Param::new("RecordType", "record").final_())
        .body_line("setReferencedRecord(record);")
}

fn fragment(node: &impl Renderable) -> CodeFragment {
    CodeFragment::sequence(node.to_fragments())
}
