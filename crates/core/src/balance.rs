//! Balance - Non-negative decimal wrapper for account balances
//!
//! A balance fed to the resolver MUST be non-negative.
//! This is enforced at the type level.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A non-negative account balance.
///
/// # Invariant
/// The inner value is always >= 0. This is enforced by the constructor.
///
/// # Example
/// ```
/// use tierbank_core::Balance;
/// use rust_decimal::Decimal;
///
/// let balance = Balance::new(Decimal::new(150_000, 2)).unwrap();
/// assert_eq!(balance.value(), Decimal::new(1500, 0));
///
/// // Negative balances are rejected
/// assert!(Balance::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Balance(Decimal);

impl Balance {
    /// Zero balance constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Balance from a Decimal.
    ///
    /// Returns `CoreError::InvalidArgument` if the value is negative.
    pub fn new(value: Decimal) -> CoreResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(CoreError::InvalidArgument(format!(
                "balance must be non-negative, got {value}"
            )))
        } else {
            // -0 and 0 are the same balance
            Ok(Self(value.abs()))
        }
    }

    /// Used for compile-time thresholds only; the caller guarantees `value >= 0`.
    pub(crate) const fn from_const(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the balance is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Balance> for Decimal {
    fn from(balance: Balance) -> Self {
        balance.0
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::ZERO
    }
}
