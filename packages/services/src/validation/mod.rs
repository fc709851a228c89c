pub mod errors;
pub mod field_validators;
pub mod input_validator;
pub mod password;
pub mod patterns;

// Re-export common types and functions
pub use errors::get_error;
pub use field_validators::{validate_input, FieldKind};
pub use input_validator::{validate_form, InputValidator};
pub use password::validate_password;
