//! Currency model and the static table of supported currencies.

use serde::{Deserialize, Serialize};

/// The code of the currency used when none is configured, and the fallback
/// for unknown codes.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Where a currency symbol is rendered relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPosition {
    /// Symbol before the amount, no separator (`$2.50`).
    Prefix,
    /// Symbol after the amount, separated by one space (`2.50 kr`).
    Suffix,
}

/// A supported currency.
///
/// # Example
///
/// ```
/// use allowance_engine::models::{CurrencyPosition, CurrencySpec};
///
/// let sek = CurrencySpec::lookup("SEK");
/// assert_eq!(sek.symbol, "kr");
/// assert_eq!(sek.position, CurrencyPosition::Suffix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencySpec {
    /// ISO 4217 code (e.g., "EUR").
    pub code: &'static str,
    /// Display symbol (e.g., "€").
    pub symbol: &'static str,
    /// Side of the amount the symbol is rendered on.
    pub position: CurrencyPosition,
}

/// All currencies the engine knows how to format.
pub const SUPPORTED_CURRENCIES: &[CurrencySpec] = &[
    CurrencySpec {
        code: "EUR",
        symbol: "€",
        position: CurrencyPosition::Prefix,
    },
    CurrencySpec {
        code: "USD",
        symbol: "$",
        position: CurrencyPosition::Prefix,
    },
    CurrencySpec {
        code: "GBP",
        symbol: "£",
        position: CurrencyPosition::Prefix,
    },
    CurrencySpec {
        code: "SEK",
        symbol: "kr",
        position: CurrencyPosition::Suffix,
    },
    CurrencySpec {
        code: "NOK",
        symbol: "kr",
        position: CurrencyPosition::Suffix,
    },
    CurrencySpec {
        code: "DKK",
        symbol: "kr",
        position: CurrencyPosition::Suffix,
    },
    CurrencySpec {
        code: "PLN",
        symbol: "zł",
        position: CurrencyPosition::Suffix,
    },
];

impl CurrencySpec {
    /// Finds a currency by code, ignoring ASCII case.
    pub fn find(code: &str) -> Option<&'static CurrencySpec> {
        SUPPORTED_CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Finds a currency by code, falling back to [`DEFAULT_CURRENCY`] for
    /// unknown codes. Never fails.
    pub fn lookup(code: &str) -> &'static CurrencySpec {
        Self::find(code).unwrap_or_else(Self::default_currency)
    }

    /// Returns the default currency.
    pub fn default_currency() -> &'static CurrencySpec {
        // EUR is the first table entry.
        &SUPPORTED_CURRENCIES[0]
    }

    /// Returns true if `code` is in the supported table.
    pub fn is_supported(code: &str) -> bool {
        Self::find(code).is_some()
    }
}
