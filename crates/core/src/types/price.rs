//! Type-safe price representation using decimal arithmetic.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., francs, not centimes).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in Rwandan francs from a whole-unit amount.
    #[must_use]
    pub fn rwf(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
            currency_code: CurrencyCode::RWF,
        }
    }

    /// Line total for this price at the given quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.amount * Decimal::from(quantity)
    }

    /// Format for display (e.g., "RWF 15000").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.currency_code.code(), self.amount)
    }
}

/// ISO 4217 currency codes for the markets Ecuruza serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Rwandan franc.
    #[default]
    RWF,
    /// Kenyan shilling.
    KES,
    /// Ugandan shilling.
    UGX,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RWF => "FRw",
            Self::KES => "KSh",
            Self::UGX => "USh",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RWF => "RWF",
            Self::KES => "KES",
            Self::UGX => "UGX",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

/// A currency code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    /// Parse an ISO 4217 code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RWF" => Ok(Self::RWF),
            "KES" => Ok(Self::KES),
            "UGX" => Ok(Self::UGX),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            _ => Err(UnknownCurrency(s.to_owned())),
        }
    }
}
