//! Utility helpers shared across the WASM frontend.

/// Render a price for list rows, e.g. `9.99` -> `"$9.99"`.
///
/// Always two decimals so table cells line up.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Parse the free-text price input into a value the backend will accept.
///
/// Returns `None` for anything that is not a finite, non-negative number so
/// the caller can refuse to send the request.
pub fn parse_price(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(0.5), "$0.50");
    }

    #[test]
    fn test_parse_price_accepts_plain_numbers() {
        assert_eq!(parse_price("9.99"), Some(9.99));
        assert_eq!(parse_price(" 12 "), Some(12.0));
        assert_eq!(parse_price("0"), Some(0.0));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }
}
