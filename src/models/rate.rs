//! Percentage rates (base interest rate, margin)
//!
//! Stored as hundredths of a percent so "10.25" round-trips exactly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::{hundredths_from_f64, parse_hundredths};
use crate::error::LedgerResult;

/// An annual percentage rate with two fractional digits of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rate(i64);

impl Rate {
    /// Create a rate from hundredths of a percent (`1025` is 10.25%)
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create a rate from a whole percentage
    pub const fn from_percent(percent: i64) -> Self {
        Self(percent * 100)
    }

    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The rate as a percentage, e.g. `10.25`
    pub fn as_percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a percentage such as "10", "3.5" or "0.25"
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let s = s.trim();
        parse_hundredths(s.strip_suffix('%').unwrap_or(s)).map(Self)
    }
}

impl Rate {
    /// Sum of two rates, `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}%", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_percent())
    }
}

impl<'de> Deserialize<'de> for Rate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        hundredths_from_f64(f64::deserialize(deserializer)?)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
