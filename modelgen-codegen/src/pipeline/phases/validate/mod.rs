//! Validate phase - runs lints on every table.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateColumnLint, DuplicateIdentifierLint, EmptyTableLint, GenericReferenceLint,
    ListTypeLint, UnresolvedReferenceLint,
};

use crate::pipeline::{CheckContext, Phase};

/// Phase that validates table metadata using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateIdentifierLint),
                Box::new(DuplicateColumnLint),
                Box::new(GenericReferenceLint),
                Box::new(UnresolvedReferenceLint),
                Box::new(ListTypeLint),
                Box::new(EmptyTableLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check table metadata and collect diagnostics"
    }

    fn run(&self, ctx: &mut CheckContext) -> Result<()> {
        for table in &ctx.tables {
            let mut found = Vec::new();
            for lint in &self.lints {
                lint.check(table, &mut found);
            }
            ctx.diagnostics
                .extend(found.into_iter().map(|d| d.in_table(table.name())));
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use modelgen_meta::TableFile;

    use super::*;
    use crate::pipeline::Diagnostic;

    fn table(content: &str) -> TableFile {
        toml::from_str(content).expect("Failed to parse test table")
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _table: &TableFile, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("always-error", "forced error"));
            }
        }

        let mut ctx = CheckContext::new(vec![table("[table]\nname = \"C_Order\"\n")]);

        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
        assert_eq!(ctx.diagnostics[0].table.as_deref(), Some("C_Order"));
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = CheckContext::new(vec![table("[table]\nname = \"C_Order\"\n")]);

        let phase = ValidatePhase::empty().with_lint(EmptyTableLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec![
                "duplicate-identifier",
                "duplicate-column",
                "generic-reference",
                "unresolved-reference",
                "list-type",
                "empty-table",
            ]
        );
    }
}
