//! ISO 4217 currencies supported by Tally.
//!
//! The set is closed: every currency carries a fixed minor-unit scale
//! factor, and money amounts are always stored at that precision.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Brazilian Real
    Brl,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Self; 3] = [Self::Usd, Self::Eur, Self::Brl];

    /// Number of minor units in one major unit (e.g. 100 cents per dollar).
    #[must_use]
    pub const fn scale_factor(self) -> i64 {
        match self {
            Self::Usd | Self::Eur | Self::Brl => 100,
        }
    }

    /// Number of decimal places of the minor unit.
    ///
    /// Always `log10(scale_factor())`.
    #[must_use]
    pub const fn minor_unit_digits(self) -> u32 {
        match self {
            Self::Usd | Self::Eur | Self::Brl => 2,
        }
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Brl => "BRL",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "BRL" => Ok(Self::Brl),
            _ => Err(MoneyError::UnknownCurrency(s.to_string())),
        }
    }
}
