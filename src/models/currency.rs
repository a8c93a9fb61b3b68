//! Supported loan currencies
//!
//! A closed allow-list of ISO 4217 codes, each with a display symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// ISO 4217 currency a loan can be denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
    Usd,
}

impl Currency {
    /// Every supported currency, in prompt order
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Gbp, Currency::Usd];

    /// The 3-letter ISO code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Usd => "USD",
        }
    }

    /// The display symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Usd => "$",
        }
    }

    /// Validate a currency code (case-insensitive)
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| LedgerError::InvalidCurrency(s.trim().to_string()))
    }

    /// Symbol for a raw code; empty for codes outside the allow-list
    pub fn symbol_for(code: &str) -> &'static str {
        Self::parse(code).map(|c| c.symbol()).unwrap_or("")
    }

    /// Comma separated list of allowed codes, used in prompts and errors
    pub fn allowed_codes() -> String {
        Self::ALL
            .iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
