//! Built-in lints for table metadata.

mod duplicate_column;
mod duplicate_identifier;
mod empty_table;
mod generic_reference;
mod list_type;
mod unresolved_reference;

pub use duplicate_column::DuplicateColumnLint;
pub use duplicate_identifier::DuplicateIdentifierLint;
pub use empty_table::EmptyTableLint;
pub use generic_reference::GenericReferenceLint;
pub use list_type::ListTypeLint;
pub use unresolved_reference::UnresolvedReferenceLint;
