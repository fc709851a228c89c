use std::fmt;

pub const PASSWORD_RULES_MESSAGE: &str =
    "Password must be at least 8 characters long and contain at least 1 letter, and 1 number";

const MIN_LENGTH: usize = 8;

/// Various types of password validation errors
#[derive(Debug, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// Password is too short
    TooShort,
    /// Password is missing a lowercase letter
    MissingLowercase,
    /// Password is missing a digit
    MissingDigit,
    /// Password spans more than one line
    LineBreak,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordValidationError::TooShort =>
                write!(f, "Password must be at least {} characters long", MIN_LENGTH),
            PasswordValidationError::MissingLowercase =>
                write!(f, "Password must contain at least one lowercase letter"),
            PasswordValidationError::MissingDigit =>
                write!(f, "Password must contain at least one digit"),
            PasswordValidationError::LineBreak =>
                write!(f, "Password must not contain line breaks"),
        }
    }
}

/// Validates a password against the sign-up rules
///
/// # Arguments
/// * `password` - The password to validate
///
/// # Returns
/// * `Ok(())` if the password is valid
/// * `Err(PasswordValidationError)` naming the first rule that failed
pub fn validate_password(password: &str) -> Result<(), PasswordValidationError> {
    if password.chars().any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')) {
        return Err(PasswordValidationError::LineBreak);
    }

    if password.chars().count() < MIN_LENGTH {
        return Err(PasswordValidationError::TooShort);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordValidationError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordValidationError::MissingDigit);
    }

    Ok(())
}
