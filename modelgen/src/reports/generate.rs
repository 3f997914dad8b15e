//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Whether files were only previewed.
    pub dry_run: bool,
    /// Warning messages from the lints.
    pub warnings: Vec<String>,
    /// One outcome per table, in generation order.
    pub outcomes: Vec<TableOutcome>,
}

/// What happened to one table.
#[derive(Debug)]
pub enum TableOutcome {
    /// The class was written to disk.
    Written {
        table: String,
        path: PathBuf,
        size_kb: usize,
    },
    /// Dry-run preview.
    Preview {
        table: String,
        path: PathBuf,
        content: String,
    },
    /// Generation failed; other tables are unaffected.
    Failed { table: String, error: String },
}

impl GenerateReport {
    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o, TableOutcome::Failed { .. }))
    }

    fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TableOutcome::Failed { .. }))
            .count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        for outcome in &self.outcomes {
            match outcome {
                TableOutcome::Written { path, size_kb, .. } => {
                    out.added_item(&format!("{} ({} kB)", path.display(), size_kb));
                }
                TableOutcome::Preview { path, content, .. } => {
                    out.divider(&path.display().to_string());
                    out.preformatted(content);
                }
                TableOutcome::Failed { table, error } => {
                    out.failed_item(&format!("{}\n{}", table, error));
                }
            }
        }

        let failed = self.failure_count();
        let succeeded = self.outcomes.len() - failed;
        if self.dry_run {
            out.divider("Summary");
            out.preformatted(&format!("{} files would be generated", succeeded));
        } else {
            out.newline();
            out.key_value(
                "Generated",
                &format!("{} classes in {}", succeeded, self.output_dir.display()),
            );
        }
        if failed > 0 {
            out.key_value("Failed", &failed.to_string());
        }
    }
}
