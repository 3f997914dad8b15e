//! Pipeline phase trait.

use eyre::Result;

use super::CheckContext;

/// A phase in the check pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read the
/// tables of the context and add diagnostics.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the check context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CheckContext) -> Result<()>;
}
