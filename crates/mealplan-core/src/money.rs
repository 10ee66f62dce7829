//! Lenient numeric parsing and price formatting for grocery amounts.
//!
//! Quantities and prices are kept as the text the user typed. They are only
//! interpreted when a total is needed, and anything that does not start with a
//! number counts as zero rather than being rejected.

/// Parse the leading decimal number of `text`.
///
/// Mirrors the lenient "parse the numeric prefix" behaviour of typical form
/// inputs: leading whitespace is skipped, an optional sign, digits, an optional
/// fractional part and an optional exponent are consumed, and the rest of the
/// string is ignored. Returns `None` when no digits are found.
///
/// ```
/// use mealplan_core::money::parse_amount;
///
/// assert_eq!(parse_amount("4.99"), Some(4.99));
/// assert_eq!(parse_amount(" 3 kg"), Some(3.0));
/// assert_eq!(parse_amount(".5"), Some(0.5));
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let number = &s[..end];
    let number = number.strip_suffix('.').unwrap_or(number);
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Total cost of one line: `price × quantity`.
///
/// A missing or empty price counts as `"0"`, an empty quantity as `"1"`.
/// If either side does not parse, the line contributes `0`.
pub fn calculate_item_total(price: Option<&str>, quantity: &str) -> f64 {
    let price = match price {
        Some(p) if !p.is_empty() => p,
        _ => "0",
    };
    let quantity = if quantity.is_empty() { "1" } else { quantity };

    match (parse_amount(price), parse_amount(quantity)) {
        (Some(p), Some(q)) => p * q,
        _ => 0.0,
    }
}

/// Format an amount with exactly two decimal places.
pub fn format_price(amount: f64) -> String {
    // Avoid "-0.00" for totals that cancel out or round to zero
    let amount = if amount == 0.0 { 0.0 } else { amount };
    let formatted = format!("{:.2}", amount);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// Completion percentage rounded to the nearest whole number; 0 when empty.
pub fn percent_complete(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}
