pub mod constants;
pub mod error_record;
pub mod error_tree;
pub mod field;

pub use error_record::ErrorRecord;
pub use error_tree::{ErrorNode, ErrorTree};
pub use field::FieldDescriptor;
