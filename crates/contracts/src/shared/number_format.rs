//! Unit-scaled number formatting for dashboard metrics

const UNITS: [&str; 2] = ["", "thousand"];
const TERMINAL_UNIT: &str = "million";

/// Scales a value to "", "thousand" or "million" and prints it with two decimals.
///
/// The prefix (e.g. a currency sign) is prepended with a space; an empty
/// prefix is omitted entirely.
///
/// # Examples
/// ```
/// use contracts::shared::number_format::format_number;
/// assert_eq!(format_number(500.0, ""), "500.00 ");
/// assert_eq!(format_number(1500.0, ""), "1.50 thousand");
/// assert_eq!(format_number(2_500_000.0, ""), "2.50 million");
/// assert_eq!(format_number(500.0, "R$"), "R$ 500.00 ");
/// ```
pub fn format_number(value: f64, prefix: &str) -> String {
    let mut value = value;
    for unit in UNITS {
        if value < 1000.0 {
            return with_prefix(prefix, value, unit);
        }
        value /= 1000.0;
    }
    with_prefix(prefix, value, TERMINAL_UNIT)
}

fn with_prefix(prefix: &str, value: f64, unit: &str) -> String {
    if prefix.is_empty() {
        format!("{:.2} {}", value, unit)
    } else {
        format!("{} {:.2} {}", prefix, value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_tiers() {
        assert_eq!(format_number(0.0, ""), "0.00 ");
        assert_eq!(format_number(500.0, ""), "500.00 ");
        assert_eq!(format_number(999.994, ""), "999.99 ");
        assert_eq!(format_number(1000.0, ""), "1.00 thousand");
        assert_eq!(format_number(1500.0, ""), "1.50 thousand");
        assert_eq!(format_number(2_500_000.0, ""), "2.50 million");
    }

    #[test]
    fn test_million_is_terminal() {
        assert_eq!(format_number(7_250_000_000.0, ""), "7250.00 million");
    }

    #[test]
    fn test_format_number_with_prefix() {
        assert_eq!(format_number(500.0, "R$"), "R$ 500.00 ");
        assert_eq!(format_number(12_340.0, "R$"), "R$ 12.34 thousand");
    }
}
