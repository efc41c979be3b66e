//! Display currencies.
//!
//! Currency is a label only: amounts are never converted, and an unknown
//! code falls back to the default currency rather than erroring.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// A display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub name: String,
}

const CATALOG: &[(&str, &str, &str)] = &[
    ("INR", "₹", "Indian Rupee"),
    ("USD", "$", "US Dollar"),
    ("EUR", "€", "Euro"),
    ("GBP", "£", "British Pound"),
    ("JPY", "¥", "Japanese Yen"),
    ("CAD", "C$", "Canadian Dollar"),
    ("AUD", "A$", "Australian Dollar"),
    ("CHF", "CHF", "Swiss Franc"),
    ("CNY", "¥", "Chinese Yuan"),
    ("SGD", "S$", "Singapore Dollar"),
];

impl Currency {
    fn from_entry(&(code, symbol, name): &(&str, &str, &str)) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    /// All supported currencies, in catalog order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        CATALOG.iter().map(Self::from_entry).collect()
    }

    /// Look up a currency by code (case-insensitive).
    #[must_use]
    pub fn find(code: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|(c, _, _)| c.eq_ignore_ascii_case(code))
            .map(Self::from_entry)
    }

    /// Look up a currency by code, falling back to the default currency.
    #[must_use]
    pub fn by_code(code: &str) -> Self {
        Self::find(code).unwrap_or_default()
    }

    /// Render `amount` as symbol followed by exactly two decimals.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = constants::round_amount(amount);
        format!("{}{:.2}", self.symbol, rounded)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::find(constants::DEFAULT_CURRENCY_CODE)
            .unwrap_or_else(|| Self::from_entry(&CATALOG[0]))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inr() {
        let c = Currency::default();
        assert_eq!(c.code, "INR");
        assert_eq!(c.symbol, "₹");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Currency::by_code("usd").symbol, "$");
        assert_eq!(Currency::by_code("CHF").symbol, "CHF");
    }

    #[test]
    fn unknown_code_falls_back() {
        assert!(Currency::find("XYZ").is_none());
        assert_eq!(Currency::by_code("XYZ").code, "INR");
    }

    #[test]
    fn format_pads_to_two_decimals() {
        let usd = Currency::by_code("USD");
        assert_eq!(usd.format(Decimal::new(50, 0)), "$50.00");
        assert_eq!(usd.format(Decimal::new(125, 1)), "$12.50");
        assert_eq!(usd.format(Decimal::new(33335, 3)), "$33.34");
    }

    #[test]
    fn catalog_has_ten_entries() {
        assert_eq!(Currency::all().len(), 10);
    }
}
