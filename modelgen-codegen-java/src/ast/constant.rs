//! Java constant declarations.

use modelgen_codegen::builder::{CodeFragment, Renderable};

/// A `public static final` field.
#[derive(Debug, Clone)]
pub struct Constant {
    doc: Vec<String>,
    ty: String,
    name: String,
    value: String,
}

impl Constant {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            doc: Vec::new(),
            ty: ty.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn int(name: impl Into<String>, value: i32) -> Self {
        Self::new("int", name, value.to_string())
    }

    /// A `String` constant; the value is quoted and escaped.
    pub fn string(name: impl Into<String>, value: &str) -> Self {
        Self::new("String", name, string_literal(value))
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Constant {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::JavaDoc(self.doc.clone()));
        }
        fragments.push(CodeFragment::line(format!(
            "public static final {} {} = {};",
            self.ty, self.name, self.value
        )));
        fragments
    }
}

/// Quote `value` as a Java string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use modelgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_int_constant() {
        let mut builder = CodeBuilder::java();
        builder.emit(&Constant::int("DOCSTATUS_AD_Reference_ID", 131));
        assert_eq!(
            builder.build(),
            "public static final int DOCSTATUS_AD_Reference_ID = 131;\n"
        );
    }

    #[test]
    fn test_string_constant_with_doc() {
        let mut builder = CodeBuilder::java();
        builder.emit(&Constant::string("DOCSTATUS_Drafted", "DR").doc("Drafted = DR"));
        assert_eq!(
            builder.build(),
            "/** Drafted = DR */\npublic static final String DOCSTATUS_Drafted = \"DR\";\n"
        );
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(string_literal("x\ny"), r#""x\ny""#);
    }
}
