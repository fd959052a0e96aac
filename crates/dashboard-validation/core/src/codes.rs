//! One-time codes and ticker symbols

use once_cell::sync::Lazy;
use regex::Regex;

static TOTP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("totp regex is valid"));

static SYMBOL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{1,5}$").expect("symbol regex is valid"));

pub const TOTP_MESSAGE: &str = "TOTP code must be 6 digits";
pub const SYMBOL_MESSAGE: &str = "Stock symbol must be 1-5 uppercase letters";

/// Exactly six ASCII digits
pub fn is_valid_totp(code: &str) -> bool {
    TOTP_REGEX.is_match(code)
}

/// One to five letters, case-insensitive
pub fn is_valid_stock_symbol(symbol: &str) -> bool {
    SYMBOL_REGEX.is_match(&symbol.to_uppercase())
}

/// Canonical (uppercased) form of a ticker symbol
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

pub fn validate_totp(code: &str) -> Result<(), String> {
    if is_valid_totp(code) {
        Ok(())
    } else {
        Err(TOTP_MESSAGE.to_string())
    }
}

pub fn validate_stock_symbol(symbol: &str) -> Result<(), String> {
    if is_valid_stock_symbol(symbol) {
        Ok(())
    } else {
        Err(SYMBOL_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totp() {
        assert!(is_valid_totp("123456"));
        assert!(is_valid_totp("000000"));
        assert!(!is_valid_totp("12a456"));
        assert!(!is_valid_totp("12345"));
        assert!(!is_valid_totp("1234567"));
        // Non-ASCII digits are rejected
        assert!(!is_valid_totp("١٢٣٤٥٦"));
    }

    #[test]
    fn test_stock_symbol() {
        assert!(is_valid_stock_symbol("AAPL"));
        assert!(is_valid_stock_symbol("aapl"));
        assert!(is_valid_stock_symbol("f"));
        assert!(!is_valid_stock_symbol("TOOLONG"));
        assert!(!is_valid_stock_symbol("BRK.B"));
        assert!(!is_valid_stock_symbol("A1"));
        assert_eq!(normalize_symbol(" msft "), "MSFT");
    }
}
