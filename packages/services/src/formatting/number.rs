use crate::utils::round_half_away;

/// Compact an amount with Indian suffixes: `cr`, `lakh` and `k`.
pub fn format_number(num: f64) -> String {
    if num.is_nan() {
        return "N/A".to_string();
    }

    if num >= 10_000_000.0 {
        format!("{:.1}cr", round_half_away(num / 10_000_000.0, 1))
    } else if num >= 100_000.0 {
        format!("{:.1}lakh", round_half_away(num / 100_000.0, 1))
    } else if num >= 1_000.0 {
        format!("{:.1}k", round_half_away(num / 1_000.0, 1))
    } else {
        plain_number(num)
    }
}

fn plain_number(num: f64) -> String {
    if num.is_infinite() {
        return if num > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if num.fract() == 0.0 && num.abs() < 1e21 {
        return format!("{}", num as i64);
    }
    num.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(format_number(25_000_000.0), "2.5cr");
        assert_eq!(format_number(150_000.0), "1.5lakh");
        assert_eq!(format_number(1_000.0), "1.0k");
        assert_eq!(format_number(12_340.0), "12.3k");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(format_number(1_250.0), "1.3k");
        assert_eq!(format_number(1_025_000.0), "10.3lakh");
        assert_eq!(format_number(12_500_000.0), "1.3cr");
    }

    #[test]
    fn test_small_numbers_are_plain() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-5000.0), "-5000");
        assert_eq!(format_number(12.75), "12.75");
    }

    #[test]
    fn test_nan() {
        assert_eq!(format_number(f64::NAN), "N/A");
    }
}
