//! Check context passed through pipeline phases.

use indexmap::IndexMap;
use modelgen_meta::TableFile;

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CheckContext {
    /// Tables as written in their metadata files, unvalidated.
    pub tables: Vec<TableFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckContext {
    pub fn new(tables: Vec<TableFile>) -> Self {
        Self {
            tables,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Diagnostics grouped by table, in the order tables were first reported.
    ///
    /// Diagnostics without a table are grouped under the empty string.
    pub fn by_table(&self) -> IndexMap<&str, Vec<&Diagnostic>> {
        let mut grouped: IndexMap<&str, Vec<&Diagnostic>> = IndexMap::new();
        for diagnostic in &self.diagnostics {
            grouped
                .entry(diagnostic.table.as_deref().unwrap_or(""))
                .or_default()
                .push(diagnostic);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut ctx = CheckContext::new(Vec::new());
        ctx.add_diagnostic(Diagnostic::error("a", "one"));
        ctx.add_diagnostic(Diagnostic::warning("b", "two"));
        ctx.add_diagnostic(Diagnostic::info("c", "three"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.errors().count(), 1);
    }

    #[test]
    fn test_by_table() {
        let mut ctx = CheckContext::new(Vec::new());
        ctx.add_diagnostic(Diagnostic::info("a", "1").in_table("M_Product"));
        ctx.add_diagnostic(Diagnostic::info("a", "2").in_table("C_Order"));
        ctx.add_diagnostic(Diagnostic::info("a", "3").in_table("M_Product"));

        let grouped = ctx.by_table();
        let tables: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(tables, vec!["M_Product", "C_Order"]);
        assert_eq!(grouped["M_Product"].len(), 2);
    }
}
