//! Currency formatting collaborator.
//!
//! The card treats price formatting as opaque: it hands over a possibly
//! absent amount and currency code and renders whatever comes back. The
//! bundled [`SymbolFormatter`] covers the common storefront currencies.

/// Formats a monetary amount for display.
///
/// Implementations must tolerate absent input and never panic.
pub trait CurrencyFormatter {
    /// Format an amount with the given ISO 4217 currency code.
    ///
    /// An absent amount formats to an empty string.
    fn format(&self, amount: Option<f64>, currency: Option<&str>) -> String;
}

/// Symbol-prefix formatter for common currencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolFormatter;

impl SymbolFormatter {
    fn symbol(code: &str) -> Option<&'static str> {
        match code {
            "USD" => Some("$"),
            "EUR" => Some("\u{20ac}"),
            "GBP" => Some("\u{00a3}"),
            "JPY" => Some("\u{00a5}"),
            "BRL" => Some("R$"),
            "CAD" => Some("CA$"),
            "AUD" => Some("A$"),
            "MXN" => Some("MX$"),
            _ => None,
        }
    }

    fn decimal_places(code: &str) -> usize {
        match code {
            "JPY" => 0,
            _ => 2,
        }
    }
}

impl CurrencyFormatter for SymbolFormatter {
    fn format(&self, amount: Option<f64>, currency: Option<&str>) -> String {
        let Some(amount) = amount else {
            return String::new();
        };
        match currency {
            Some(code) => {
                let code = code.to_uppercase();
                let places = Self::decimal_places(&code);
                match Self::symbol(&code) {
                    Some(symbol) => format!("{}{:.places$}", symbol, amount),
                    None => format!("{:.places$} {}", amount, code),
                }
            }
            None => format!("{:.2}", amount),
        }
    }
}
