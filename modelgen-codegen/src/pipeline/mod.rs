//! Check pipeline for table metadata.
//!
//! The [`Pipeline`] runs phases over a [`CheckContext`]; the built-in
//! validate phase runs lints that report what the generator would reject,
//! misgenerate or silently skip.

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CheckContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
