//! Import collection for generated classes.

use std::collections::BTreeSet;

use crate::builder::{CodeFragment, Renderable};

/// Deduplicated, lexicographically ordered set of fully qualified class
/// names imported by a generated class.
///
/// Names that never need an import are dropped on insertion: `java.lang.*`
/// (but not `java.lang.reflect.*`) and anything inside the class's own
/// package.
///
/// # Example
///
/// ```
/// use modelgen_codegen::generation::ImportSet;
///
/// let mut imports = ImportSet::new("de.metas.invoice.model");
/// imports.add("java.sql.Timestamp");
/// imports.add("java.math.BigDecimal");
/// imports.add("java.sql.Timestamp");
/// imports.add("java.lang.String");
///
/// let names: Vec<&str> = imports.iter().collect();
/// assert_eq!(names, ["java.math.BigDecimal", "java.sql.Timestamp"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    package: String,
    names: BTreeSet<String>,
}

impl ImportSet {
    /// Create an empty set for classes of `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            names: BTreeSet::new(),
        }
    }

    /// Whether `name` needs an import statement at all.
    pub fn is_importable(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        if name.starts_with("java.lang.") && !name.starts_with("java.lang.reflect.") {
            return false;
        }
        if !self.package.is_empty()
            && name
                .strip_prefix(self.package.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
        {
            return false;
        }
        true
    }

    /// Add a fully qualified name. Returns whether the set changed.
    pub fn add(&mut self, name: &str) -> bool {
        if !self.is_importable(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Merge another set into this one, applying this set's exclusions.
    pub fn merge(&mut self, other: &ImportSet) {
        for name in &other.names {
            self.add(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn package(&self) -> &str {
        &self.package
    }
}

/// Renders one `import` statement per name followed by a blank line.
impl Renderable for ImportSet {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self
            .iter()
            .map(|name| CodeFragment::line(format!("import {};", name)))
            .collect();
        fragments.push(CodeFragment::blank());
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    #[test]
    fn test_add_is_idempotent() {
        let mut imports = ImportSet::new("org.compiere.model");
        assert!(imports.add("java.util.Properties"));
        assert!(!imports.add("java.util.Properties"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_java_lang_excluded() {
        let mut imports = ImportSet::new("org.compiere.model");
        assert!(!imports.add("java.lang.String"));
        assert!(!imports.add("java.lang.Integer"));
        assert!(imports.add("java.lang.reflect.Method"));
        assert_eq!(imports.iter().collect::<Vec<_>>(), ["java.lang.reflect.Method"]);
    }

    #[test]
    fn test_own_package_excluded() {
        let mut imports = ImportSet::new("org.compiere.model");
        assert!(!imports.add("org.compiere.model.I_C_Order"));
        assert!(!imports.add("org.compiere.model.sub.Thing"));
        assert!(imports.add("org.compiere.modelx.Other"));
        assert!(imports.add("org.compiere.util.KeyNamePair"));
    }

    #[test]
    fn test_empty_name_ignored() {
        let mut imports = ImportSet::new("");
        assert!(!imports.add(""));
        assert!(imports.is_empty());
    }

    #[test]
    fn test_sorted_output() {
        let mut imports = ImportSet::new("de.metas.model");
        for name in ["java.util.Properties", "java.math.BigDecimal", "java.sql.ResultSet"] {
            imports.add(name);
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&imports);

        assert_eq!(
            builder.build(),
            "import java.math.BigDecimal;\nimport java.sql.ResultSet;\nimport java.util.Properties;\n\n"
        );
    }

    #[test]
    fn test_merge_applies_exclusions() {
        let mut body = ImportSet::new("");
        body.add("de.metas.model.I_C_Order");
        body.add("java.sql.Timestamp");

        let mut header = ImportSet::new("de.metas.model");
        header.merge(&body);

        assert!(header.contains("java.sql.Timestamp"));
        assert!(!header.contains("de.metas.model.I_C_Order"));
    }
}
