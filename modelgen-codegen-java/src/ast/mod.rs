//! Java AST builders.

mod constant;
mod method;

pub use constant::Constant;
pub use method::{Method, Param, Visibility};
