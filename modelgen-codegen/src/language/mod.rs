//! Language-specific abstractions.

mod traits;

pub use traits::{LanguageCodegen, PreviewFile, TypeMapper};
