//! Currency - Display Currency

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Currency used to display prices.
///
/// Prices are stored in a single canonical unit; the currency only changes
/// the symbol and its placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Gbp,
    Usd,
}

impl Currency {
    /// All selectable currencies, in selector order
    pub fn all() -> &'static [Currency] {
        &[Currency::Eur, Currency::Gbp, Currency::Usd]
    }

    /// ISO 4217 code
    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Invalid {
                message: format!("Unknown currency: {s}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!("EUR".parse::<Currency>().ok(), Some(Currency::Eur));
        assert_eq!(" gbp ".parse::<Currency>().ok(), Some(Currency::Gbp));
        assert!("JPY".parse::<Currency>().is_err());
    }

    #[test]
    fn test_default_is_euro() {
        assert_eq!(Currency::default(), Currency::Eur);
        assert_eq!(Currency::default().to_string(), "EUR");
    }
}
