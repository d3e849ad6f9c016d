//! Supported currencies
//!
//! The allow-list offered for display conversion, with symbols and names.

/// Static description of a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Currencies that may be offered for conversion, in display order
pub const MAJOR_CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" },
    CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    CurrencyInfo { code: "GBP", symbol: "£", name: "British Pound" },
    CurrencyInfo { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    CurrencyInfo { code: "CAD", symbol: "CA$", name: "Canadian Dollar" },
    CurrencyInfo { code: "CHF", symbol: "CHF", name: "Swiss Franc" },
    CurrencyInfo { code: "CNY", symbol: "CN¥", name: "Chinese Yuan" },
    CurrencyInfo { code: "SEK", symbol: "kr", name: "Swedish Krona" },
    CurrencyInfo { code: "NZD", symbol: "NZ$", name: "New Zealand Dollar" },
    CurrencyInfo { code: "MXN", symbol: "MX$", name: "Mexican Peso" },
    CurrencyInfo { code: "SGD", symbol: "S$", name: "Singapore Dollar" },
    CurrencyInfo { code: "HKD", symbol: "HK$", name: "Hong Kong Dollar" },
    CurrencyInfo { code: "NOK", symbol: "kr", name: "Norwegian Krone" },
    CurrencyInfo { code: "KRW", symbol: "₩", name: "South Korean Won" },
    CurrencyInfo { code: "TRY", symbol: "₺", name: "Turkish Lira" },
    CurrencyInfo { code: "INR", symbol: "₹", name: "Indian Rupee" },
    CurrencyInfo { code: "RUB", symbol: "₽", name: "Russian Ruble" },
    CurrencyInfo { code: "BRL", symbol: "R$", name: "Brazilian Real" },
    CurrencyInfo { code: "ZAR", symbol: "R", name: "South African Rand" },
];

/// Look up a currency on the allow-list (case-insensitive)
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    let code = code.trim();
    MAJOR_CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Display symbol for a currency code, falling back to the code itself
pub fn currency_symbol(code: &str) -> String {
    currency_info(code)
        .map(|c| c.symbol.to_string())
        .unwrap_or_else(|| code.trim().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_size() {
        assert_eq!(MAJOR_CURRENCIES.len(), 20);
        assert_eq!(MAJOR_CURRENCIES[0].code, "USD");
        assert_eq!(MAJOR_CURRENCIES[19].code, "ZAR");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(currency_symbol("eur"), "€");
        assert_eq!(currency_info("gbp").map(|c| c.name), Some("British Pound"));
        assert_eq!(currency_symbol("xyz"), "XYZ");
        assert!(currency_info("PLN").is_none());
    }
}
