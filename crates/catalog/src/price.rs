//! Price-string parsing
//!
//! Providers format prices like "$29.99", "$1,234.56" or "From $49.99 List:
//! $59.99". We only need a number good enough for the price band filter, and
//! a string we cannot parse must never cost us the item.

/// Parse a currency-formatted display price into its numeric value.
///
/// Expects a dollar sign somewhere in the string; strips all dollar signs
/// and thousands separators, then parses the first whitespace-delimited
/// token. Returns None on any failure; callers keep the item in that case.
pub fn parse_price(price: &str) -> Option<f64> {
    if !price.contains('$') {
        return None;
    }
    let cleaned = price.replace(['$', ','], "");
    let token = cleaned.split_whitespace().next()?;
    token.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_price() {
        assert_eq!(parse_price("$29.99"), Some(29.99));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_price("$1,299.00"), Some(1299.00));
    }

    #[test]
    fn test_trailing_text() {
        assert_eq!(parse_price("$49.99 with coupon"), Some(49.99));
    }

    #[test]
    fn test_leading_text_fails() {
        // First token after cleanup is "From", which does not parse
        assert_eq!(parse_price("From $29.99"), None);
    }

    #[test]
    fn test_no_currency_symbol_fails() {
        assert_eq!(parse_price("29.99"), None);
        assert_eq!(parse_price("Price upon request"), None);
        assert_eq!(parse_price(""), None);
    }
}
