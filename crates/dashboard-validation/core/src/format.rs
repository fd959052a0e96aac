//! Display formatting helpers (en-US conventions)

use chrono::NaiveDateTime;

/// Clock format: `Monday, October 19, 2026 | 3:04:05 PM`
pub const DATE_TIME_FORMAT: &str = "%A, %B %-d, %Y | %-I:%M:%S %p";

/// Format an amount of money, e.g. `$1,234.56` or `-€12.00`
///
/// Known currencies use their symbol; others are prefixed by their code.
/// JPY has no minor units.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.to_uppercase();
    let (prefix, decimals) = match code.as_str() {
        "USD" => ("$".to_string(), 2),
        "EUR" => ("€".to_string(), 2),
        "GBP" => ("£".to_string(), 2),
        "JPY" => ("¥".to_string(), 0),
        _ => (format!("{} ", code), 2),
    };

    if amount.is_nan() {
        return format!("{}NaN", prefix);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, prefix);
    }

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}{}.{}", sign, prefix, group_thousands(int_part), frac),
        None => format!("{}{}{}", sign, prefix, group_thousands(int_part)),
    }
}

/// Insert thousands separators into the integer part of a number
pub fn format_number<T: std::fmt::Display>(num: T) -> String {
    let text = num.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    // Leave non-numeric renderings (NaN, inf) alone
    if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return text;
    }

    match unsigned.split_once('.') {
        Some((int_part, frac)) => format!("{}{}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}{}", sign, group_thousands(unsigned)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Escape user input the way text-node serialization does
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the dashboard clock line
pub fn format_date_time(now: &NaiveDateTime) -> String {
    now.format(DATE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.567, "USD"), "$1,234.57");
        assert_eq!(format_currency(0.5, "usd"), "$0.50");
        assert_eq!(format_currency(-1234567.0, "EUR"), "-€1,234,567.00");
        assert_eq!(format_currency(1234.4, "JPY"), "¥1,234");
        assert_eq!(format_currency(12.0, "CHF"), "CHF 12.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1000), "-1,000");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234.5678), "1,234.5678");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(
            sanitize_input("<script>alert('x') & more</script>"),
            "&lt;script&gt;alert('x') &amp; more&lt;/script&gt;"
        );
        assert_eq!(sanitize_input("AAPL"), "AAPL");
    }

    #[test]
    fn test_format_date_time() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(format_date_time(&dt), "Monday, October 19, 2026 | 3:04:05 PM");
    }
}
