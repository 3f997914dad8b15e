//! Pipeline orchestrator.

use eyre::Result;

use super::{CheckContext, Phase, phases::ValidatePhase};

/// The check pipeline orchestrator.
///
/// Runs the validate phase followed by any user phases. The context is
/// borrowed so diagnostics stay available when a phase fails.
///
/// # Example
///
/// ```
/// use modelgen_codegen::pipeline::{CheckContext, Pipeline};
///
/// let mut ctx = CheckContext::new(Vec::new());
/// Pipeline::new().run(&mut ctx).unwrap();
/// assert!(ctx.diagnostics.is_empty());
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the built-in validate phase.
    pub fn new() -> Self {
        Self {
            phases: vec![Box::new(ValidatePhase::new())],
        }
    }

    /// Create a pipeline without phases.
    pub fn empty() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the existing ones.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Run all phases in order, stopping at the first fatal failure.
    pub fn run(&self, ctx: &mut CheckContext) -> Result<()> {
        for phase in &self.phases {
            tracing::debug!(phase = phase.name(), "{}", phase.description());
            phase.run(ctx)?;
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
