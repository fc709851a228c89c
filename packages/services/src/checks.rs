use url::Url;

use crate::formatting::date::parse_date;
use crate::validation::patterns::{BASE64_DATA_REGEX, URL_REGEX};

/// Whether `url` is a URL, either by the loose `http(s)://` pattern or by a
/// full parse.
pub fn is_url(url: &str, use_regex: bool) -> bool {
    if use_regex {
        return URL_REGEX.is_match(url);
    }
    Url::parse(url).is_ok()
}

/// Whether `item` is a base64 `data:` URI.
pub fn is_base64(item: &str) -> bool {
    BASE64_DATA_REGEX.is_match(item)
}

/// Whether `value` parses as a date the same way `format_date` reads it.
pub fn is_date(value: &str) -> bool {
    parse_date(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url_with_regex() {
        assert!(is_url("https://example.com/path?q=1", true));
        assert!(is_url("HTTP://EXAMPLE.COM", true));
        assert!(!is_url("ftp://example.com", true));
        assert!(!is_url("https://exa mple.com", true));
    }

    #[test]
    fn test_is_url_with_parser() {
        assert!(is_url("ftp://example.com", false));
        assert!(is_url("mailto:someone@example.com", false));
        assert!(!is_url("example.com", false));
        assert!(!is_url("", false));
    }

    #[test]
    fn test_is_base64() {
        assert!(is_base64("data:image/png;base64,iVBORw0KGgo="));
        assert!(is_base64("data:text/plain;base64,SGVs\nbG8="));
        assert!(!is_base64("iVBORw0KGgo="));
        assert!(!is_base64("data:image/png;base64,"));
    }

    #[test]
    fn test_is_date() {
        assert!(is_date("2024-03-05"));
        assert!(is_date("2024-03-05T07:08:09Z"));
        assert!(!is_date("not a date"));
        assert!(!is_date("2024-13-40"));
    }
}
