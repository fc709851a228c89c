use once_cell::sync::Lazy;
use regex::Regex;

pub static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._]{3,}$").expect("USERNAME_REGEX should compile")
});

pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX should compile")
});

pub static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#].[^\s]*$").expect("URL_REGEX should compile")
});

pub static BASE64_DATA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:[a-zA-Z0-9/]+;base64,([A-Za-z0-9+/=]+\n*)+$")
        .expect("BASE64_DATA_REGEX should compile")
});

pub static IMAGE_DATA_URI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/(\w+);base64,").expect("IMAGE_DATA_URI_REGEX should compile")
});

pub static IMAGE_CONTENT_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^image/(\w+)").expect("IMAGE_CONTENT_TYPE_REGEX should compile")
});

pub fn is_valid_username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_pattern() {
        assert!(is_valid_username("abc_1"));
        assert!(is_valid_username("first.last"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("dash-ed"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.com"));
    }
}
