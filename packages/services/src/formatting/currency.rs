use crate::utils::round_half_away;

const DEFAULT_LOCALE: &str = "en-IN";
const DEFAULT_FRACTION_DIGITS: usize = 2;
const MAX_FRACTION_DIGITS: usize = 20;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyOptions {
    /// Skip the "No Price" / "Free" shortcuts and always format the amount.
    pub remove_default_ui: bool,
    pub show_free_on_zero: bool,
    /// BCP 47 locale; `en-IN` when unset.
    pub locales: Option<String>,
    /// Zero or unset means two digits.
    pub minimum_fraction_digits: Option<usize>,
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_ascii_uppercase().as_str() {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "AUD" => Some("A$"),
        "CAD" => Some("CA$"),
        _ => None,
    }
}

fn uses_indian_grouping(locale: &str) -> bool {
    locale.eq_ignore_ascii_case("en-IN") || locale.to_ascii_lowercase().ends_with("-in")
}

fn group_digits(digits: &str, indian: bool) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = if indian { 2 } else { 3 };
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

/// Format `amount` in currency style, like `Intl.NumberFormat` does for the
/// supported locales.
///
/// A missing amount is always `"No Price"`. Ties round away from zero.
pub fn format_currency(amount: Option<f64>, currency: &str, options: &CurrencyOptions) -> String {
    let Some(amount) = amount else {
        return "No Price".to_string();
    };
    if !options.remove_default_ui {
        if amount.is_nan() {
            return "No Price".to_string();
        }
        if amount == 0.0 && options.show_free_on_zero {
            return "Free".to_string();
        }
    }

    let locale = options.locales.as_deref().unwrap_or(DEFAULT_LOCALE);
    let prefix = match currency_symbol(currency) {
        Some(symbol) => symbol.to_string(),
        None => format!("{}\u{a0}", currency.to_ascii_uppercase()),
    };

    if amount.is_nan() {
        return format!("{prefix}NaN");
    }
    let sign = if amount.is_sign_negative() && amount != 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{prefix}∞");
    }

    let min_digits = match options.minimum_fraction_digits {
        Some(0) | None => DEFAULT_FRACTION_DIGITS,
        Some(digits) => digits.min(MAX_FRACTION_DIGITS),
    };
    let max_digits = min_digits.max(DEFAULT_FRACTION_DIGITS);

    let fixed = format!("{:.*}", max_digits, round_half_away(amount.abs(), max_digits));
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut fraction = fraction.to_string();
    while fraction.len() > min_digits && fraction.ends_with('0') {
        fraction.pop();
    }

    let grouped = group_digits(integer, uses_indian_grouping(locale));
    if fraction.is_empty() {
        format!("{sign}{prefix}{grouped}")
    } else {
        format!("{sign}{prefix}{grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_locale(locale: &str) -> CurrencyOptions {
        CurrencyOptions {
            locales: Some(locale.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_indian_grouping_by_default() {
        let options = CurrencyOptions::default();
        assert_eq!(format_currency(Some(1234567.5), "INR", &options), "₹12,34,567.50");
        assert_eq!(format_currency(Some(999.0), "INR", &options), "₹999.00");
        assert_eq!(format_currency(Some(100000.0), "USD", &options), "$1,00,000.00");
    }

    #[test]
    fn test_western_grouping() {
        let options = with_locale("en-US");
        assert_eq!(format_currency(Some(1234567.5), "USD", &options), "$1,234,567.50");
        assert_eq!(format_currency(Some(-42.0), "EUR", &options), "-€42.00");
    }

    #[test]
    fn test_default_ui_shortcuts() {
        let free = CurrencyOptions {
            show_free_on_zero: true,
            ..Default::default()
        };
        assert_eq!(format_currency(None, "INR", &CurrencyOptions::default()), "No Price");
        assert_eq!(format_currency(Some(f64::NAN), "INR", &CurrencyOptions::default()), "No Price");
        assert_eq!(format_currency(Some(0.0), "INR", &free), "Free");
        assert_eq!(format_currency(Some(0.0), "INR", &CurrencyOptions::default()), "₹0.00");

        let raw = CurrencyOptions {
            remove_default_ui: true,
            show_free_on_zero: true,
            ..Default::default()
        };
        assert_eq!(format_currency(Some(0.0), "INR", &raw), "₹0.00");
        assert_eq!(format_currency(None, "INR", &raw), "No Price");
        assert_eq!(format_currency(Some(f64::NAN), "INR", &raw), "₹NaN");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let options = CurrencyOptions::default();
        assert_eq!(format_currency(Some(0.125), "INR", &options), "₹0.13");
        assert_eq!(format_currency(Some(-0.125), "INR", &options), "-₹0.13");
    }

    #[test]
    fn test_fraction_digits() {
        let three = CurrencyOptions {
            minimum_fraction_digits: Some(3),
            ..Default::default()
        };
        assert_eq!(format_currency(Some(1.5), "INR", &three), "₹1.500");

        let one = CurrencyOptions {
            minimum_fraction_digits: Some(1),
            ..Default::default()
        };
        assert_eq!(format_currency(Some(12.5), "INR", &one), "₹12.5");
        assert_eq!(format_currency(Some(12.25), "INR", &one), "₹12.25");
    }

    #[test]
    fn test_unknown_currency_uses_code() {
        assert_eq!(
            format_currency(Some(10.0), "xyz", &with_locale("en-US")),
            "XYZ\u{a0}10.00"
        );
    }
}
