/// Default body message for each HTTP status the response helper knows about.
pub const DEFAULT_RESPONSE_MESSAGES: &[(u16, &str)] = &[
    (200, "Success"),
    (201, "Created"),
    (202, "Accepted"),
    (204, "No Content"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (409, "Conflict"),
    (422, "Unprocessable Entity"),
    (429, "Too Many Requests"),
    (500, "Internal Server Error"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
];

/// Status codes for which `hasError` is false unless the caller forces it.
pub const SUCCESS_CODES: &[u16] = &[200, 201, 202, 204];

pub fn default_response_message(code: u16) -> Option<&'static str> {
    DEFAULT_RESPONSE_MESSAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, message)| *message)
}

pub fn is_success_code(code: u16) -> bool {
    SUCCESS_CODES.contains(&code)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Month {
    pub name: &'static str,
    pub short: &'static str,
}

pub const MONTHS: [Month; 12] = [
    Month { name: "January", short: "Jan" },
    Month { name: "February", short: "Feb" },
    Month { name: "March", short: "Mar" },
    Month { name: "April", short: "Apr" },
    Month { name: "May", short: "May" },
    Month { name: "June", short: "Jun" },
    Month { name: "July", short: "Jul" },
    Month { name: "August", short: "Aug" },
    Month { name: "September", short: "Sep" },
    Month { name: "October", short: "Oct" },
    Month { name: "November", short: "Nov" },
    Month { name: "December", short: "Dec" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        assert_eq!(default_response_message(405), Some("Method Not Allowed"));
        assert_eq!(default_response_message(418), None);
    }

    #[test]
    fn test_success_codes() {
        assert!(is_success_code(200));
        assert!(is_success_code(204));
        assert!(!is_success_code(301));
        assert!(!is_success_code(404));
    }

    #[test]
    fn test_months_are_ordered() {
        assert_eq!(MONTHS[0].short, "Jan");
        assert_eq!(MONTHS[11].name, "December");
    }
}
