//! Java type mapper implementation.

use modelgen_codegen::language::TypeMapper;
use modelgen_core::ValueClass;

/// Maps value classes to the Java types used in generated signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn map_value_class(&self, class: ValueClass) -> &'static str {
        match class {
            ValueClass::String => "String",
            ValueClass::Integer => "int",
            ValueClass::BigDecimal => "BigDecimal",
            ValueClass::Timestamp => "Timestamp",
            ValueClass::Boolean => "boolean",
            ValueClass::Bytes => "byte[]",
            ValueClass::Object => "Object",
        }
    }

    fn import_for(&self, class: ValueClass) -> Option<&'static str> {
        match class {
            ValueClass::BigDecimal => Some("java.math.BigDecimal"),
            ValueClass::Timestamp => Some("java.sql.Timestamp"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_value_class() {
        let mapper = JavaTypeMapper;
        assert_eq!(mapper.map_value_class(ValueClass::Integer), "int");
        assert_eq!(mapper.map_value_class(ValueClass::Boolean), "boolean");
        assert_eq!(mapper.map_value_class(ValueClass::Bytes), "byte[]");
        assert_eq!(mapper.map_value_class(ValueClass::String), "String");
    }

    #[test]
    fn test_imports() {
        let mapper = JavaTypeMapper;
        assert_eq!(mapper.import_for(ValueClass::BigDecimal), Some("java.math.BigDecimal"));
        assert_eq!(mapper.import_for(ValueClass::Timestamp), Some("java.sql.Timestamp"));
        assert_eq!(mapper.import_for(ValueClass::String), None);
        assert_eq!(mapper.import_for(ValueClass::Bytes), None);
    }
}
