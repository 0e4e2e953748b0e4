//! Number formatting for tables and totals

/// Formats a number with a space as thousands separator and the given decimals
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Amount in soles, e.g. `S/ 1 234.50`
pub fn format_money(value: f64) -> String {
    format!("S/ {}", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1 234 567");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1 234.5");
        assert_eq!(format_number_with_decimals(999.0, 2), "999.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(25.0), "S/ 25.00");
        assert_eq!(format_money(0.0), "S/ 0.00");
        assert_eq!(format_money(1234567.891), "S/ 1 234 567.89");
    }
}
