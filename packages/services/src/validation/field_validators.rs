use models::{ErrorRecord, FieldDescriptor};

use super::password::{validate_password, PASSWORD_RULES_MESSAGE};
use super::patterns::{is_valid_email, is_valid_username};

/// How a field's value is checked, derived from its `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Email,
    Password,
    /// Unrecognised names only get the required check.
    Other,
}

impl FieldKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "username" => FieldKind::Username,
            "email" => FieldKind::Email,
            "password" | "oldPassword" | "newPassword" | "confirmPassword" => FieldKind::Password,
            _ => FieldKind::Other,
        }
    }
}

/// Validate one field. A missing required value wins over a bad format, and
/// optional fields are never format checked.
pub fn validate_input(field: &FieldDescriptor) -> ErrorRecord {
    if !field.required {
        return ErrorRecord::default();
    }

    let kind = FieldKind::from_name(&field.name);

    if field.value.is_empty() {
        let message = match kind {
            FieldKind::Username => "username is required".to_string(),
            FieldKind::Email => "Email is required".to_string(),
            FieldKind::Password | FieldKind::Other => {
                format!("{} is required", field.display_name())
            }
        };
        return ErrorRecord::error(message);
    }

    let format_error = match kind {
        FieldKind::Username if !is_valid_username(&field.value) => Some("Invalid username"),
        FieldKind::Email if !is_valid_email(&field.value) => Some("Invalid email address"),
        FieldKind::Password => validate_password(&field.value)
            .err()
            .map(|_| PASSWORD_RULES_MESSAGE),
        _ => None,
    };

    match format_error {
        Some(message) => ErrorRecord::error(message),
        None => ErrorRecord::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(name: &str, value: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, value).required()
    }

    #[test]
    fn test_required_messages_per_kind() {
        assert_eq!(validate_input(&required("username", "")).message, "username is required");
        assert_eq!(validate_input(&required("email", "")).message, "Email is required");

        let password = required("password", "").with_placeholder("Password");
        assert_eq!(validate_input(&password).message, "Password is required");

        let confirm = required("confirmPassword", "").with_label("Confirm password");
        assert_eq!(validate_input(&confirm).message, "Confirm password is required");

        let city = required("city", "").with_label("City");
        let record = validate_input(&city);
        assert!(record.has_error);
        assert_eq!(record.message, "City is required");
    }

    #[test]
    fn test_username_format() {
        assert_eq!(
            validate_input(&required("username", "ab")),
            ErrorRecord::error("Invalid username")
        );
        assert_eq!(validate_input(&required("username", "abc_1")), ErrorRecord::default());
    }

    #[test]
    fn test_email_format() {
        assert_eq!(
            validate_input(&required("email", "not-an-email")),
            ErrorRecord::error("Invalid email address")
        );
        assert_eq!(validate_input(&required("email", "a@b.co")), ErrorRecord::default());
    }

    #[test]
    fn test_password_format() {
        assert_eq!(validate_input(&required("password", "abcdefg1")), ErrorRecord::default());
        assert_eq!(
            validate_input(&required("newPassword", "abcdefgh")),
            ErrorRecord::error(PASSWORD_RULES_MESSAGE)
        );
    }

    #[test]
    fn test_optional_fields_skip_format_checks() {
        assert_eq!(validate_input(&FieldDescriptor::new("email", "nope")), ErrorRecord::default());
        assert_eq!(validate_input(&FieldDescriptor::new("username", "")), ErrorRecord::default());
    }

    #[test]
    fn test_unknown_kind_has_no_format_check() {
        assert_eq!(validate_input(&required("zip", "???")), ErrorRecord::default());
    }
}
