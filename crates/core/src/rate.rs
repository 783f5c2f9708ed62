//! RateTier - annual interest rate expressed as a fraction

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Annual interest rate fraction (0.01 = 1%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct RateTier(Decimal);

impl RateTier {
    /// 1% - balances below 1,000
    pub const BASIC: Self = Self(Decimal::from_parts(1, 0, 0, false, 2));
    /// 1.5% - balances from 1,000 up to 10,000
    pub const SILVER: Self = Self(Decimal::from_parts(15, 0, 0, false, 3));
    /// 2% - balances of 10,000 and above
    pub const GOLD: Self = Self(Decimal::from_parts(2, 0, 0, false, 2));

    /// Create a rate from a fraction. Negative rates are rejected.
    pub fn new(fraction: Decimal) -> CoreResult<Self> {
        if fraction < Decimal::ZERO {
            return Err(CoreError::InvalidArgument(format!(
                "rate must be non-negative, got {fraction}"
            )));
        }
        Ok(Self(fraction))
    }

    /// The rate as a fraction
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// The rate as a percentage, trailing zeros removed (0.015 -> 1.5)
    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for RateTier {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RateTier> for Decimal {
    fn from(rate: RateTier) -> Self {
        rate.0
    }
}
