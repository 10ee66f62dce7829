//! Supported display currencies

use std::fmt;

/// Code of the currency used when nothing else is configured
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

impl Currency {
    const fn new(code: &'static str, symbol: &'static str, name: &'static str) -> Self {
        Self { code, symbol, name }
    }

    /// Case-insensitive substring match on code, name or symbol
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.code.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
            || self.symbol.to_lowercase().contains(&query)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.code, self.symbol, self.name)
    }
}

pub static CURRENCIES: [Currency; 15] = [
    Currency::new("USD", "$", "US Dollar"),
    Currency::new("EUR", "€", "Euro"),
    Currency::new("GBP", "£", "British Pound"),
    Currency::new("JPY", "¥", "Japanese Yen"),
    Currency::new("CNY", "¥", "Chinese Yuan"),
    Currency::new("AUD", "A$", "Australian Dollar"),
    Currency::new("CAD", "C$", "Canadian Dollar"),
    Currency::new("CHF", "CHF", "Swiss Franc"),
    Currency::new("INR", "₹", "Indian Rupee"),
    Currency::new("NGN", "₦", "Nigerian Naira"),
    Currency::new("BRL", "R$", "Brazilian Real"),
    Currency::new("RUB", "₽", "Russian Ruble"),
    Currency::new("KRW", "₩", "South Korean Won"),
    Currency::new("MXN", "$", "Mexican Peso"),
    Currency::new("ZAR", "R", "South African Rand"),
];

/// Look up a currency by its code (case-insensitive)
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

pub fn default_currency() -> &'static Currency {
    &CURRENCIES[0]
}

/// Currencies matching `query`, in list order
pub fn filter_currencies(query: &str) -> Vec<&'static Currency> {
    CURRENCIES.iter().filter(|c| c.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_usd() {
        assert_eq!(default_currency().code, DEFAULT_CURRENCY_CODE);
        assert_eq!(default_currency().symbol, "$");
    }

    #[test]
    fn test_find_currency() {
        assert_eq!(find_currency("eur").map(|c| c.symbol), Some("€"));
        assert!(find_currency("XYZ").is_none());
    }

    #[test]
    fn test_filter_by_code_name_and_symbol() {
        let codes = |q: &str| filter_currencies(q).iter().map(|c| c.code).collect::<Vec<_>>();

        assert_eq!(codes("gbp"), vec!["GBP"]);
        assert_eq!(codes("yen"), vec!["JPY"]);
        assert_eq!(codes("¥"), vec!["JPY", "CNY"]);
        assert_eq!(codes("dollar"), vec!["USD", "AUD", "CAD"]);
        assert_eq!(codes("").len(), 15);
        assert!(codes("zzz").is_empty());
    }
}
