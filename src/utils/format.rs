/// Format an amount with thousands separators and two decimals, e.g. `₹1,234,567.89`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}

/// Truncate a string to `max_len` characters, appending an ellipsis
pub fn truncate_string(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1234567.891, "₹"), "₹1,234,567.89");
        assert_eq!(format_currency(999.5, "$"), "$999.50");
        assert_eq!(format_currency(1000.0, "$"), "$1,000.00");
        assert_eq!(format_currency(0.0, "₹"), "₹0.00");
        assert_eq!(format_currency(500000.0, ""), "500,000.00");
    }

    #[test]
    fn test_format_currency_rounding_carries() {
        assert_eq!(format_currency(999999.999, "₹"), "₹1,000,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-12345.6, "₹"), "-₹12,345.60");
        assert_eq!(format_currency(-0.001, "₹"), "₹0.00");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Software Engineer", 50), "Software Engineer");
        assert_eq!(truncate_string("Machine Learning Engineer", 10), "Machine...");
    }
}
