//! Code generation outputs.
//!
//! - [`ImportSet`] - Import tracking and deduplication

mod imports;

pub use imports::ImportSet;
