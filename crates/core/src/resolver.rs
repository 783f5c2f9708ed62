//! Rate Tier Resolver
//!
//! Maps an account balance to the annual interest rate of its tier.
//! Lookups are pure: no I/O, no interior state, same input same output.

use rust_decimal::Decimal;

use crate::balance::Balance;
use crate::error::{CoreError, CoreResult};
use crate::rate::RateTier;
use crate::schedule::{Tier, TierSchedule};

/// Balance → rate lookup over an immutable [`TierSchedule`].
#[derive(Debug, Clone, Default)]
pub struct RateTierResolver {
    schedule: TierSchedule,
}

impl RateTierResolver {
    /// Create a resolver over the standard schedule
    pub fn new() -> Self {
        Self {
            schedule: TierSchedule::standard(),
        }
    }

    /// Create a resolver over a custom (already validated) schedule
    pub fn with_schedule(schedule: TierSchedule) -> Self {
        Self { schedule }
    }

    /// Resolve a raw balance to its rate.
    ///
    /// Fails with `CoreError::InvalidArgument` when `balance < 0`.
    ///
    /// # Example
    /// ```
    /// use tierbank_core::{RateTier, RateTierResolver};
    /// use rust_decimal::Decimal;
    ///
    /// let resolver = RateTierResolver::new();
    /// assert_eq!(resolver.resolve_rate(Decimal::new(1000, 0)).unwrap(), RateTier::SILVER);
    /// assert!(resolver.resolve_rate(Decimal::new(-1, 0)).is_err());
    /// ```
    pub fn resolve_rate(&self, balance: Decimal) -> CoreResult<RateTier> {
        let balance = Balance::new(balance).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected rate lookup");
        })?;
        Ok(self.resolve(&balance))
    }

    /// Resolve an already validated balance. Never fails.
    pub fn resolve(&self, balance: &Balance) -> RateTier {
        let rate = self.tier_for(balance).rate;
        tracing::debug!(%balance, %rate, "resolved rate tier");
        rate
    }

    /// The tier containing `balance`
    pub fn tier_for(&self, balance: &Balance) -> &Tier {
        self.schedule.tier_for(balance)
    }

    /// Simple one-year interest on `balance` at its tier rate.
    ///
    /// Fails like [`resolve_rate`](Self::resolve_rate), or with
    /// `CoreError::Overflow` when the product does not fit in a Decimal.
    pub fn annual_interest(&self, balance: Decimal) -> CoreResult<Decimal> {
        let rate = self.resolve_rate(balance)?;
        Self::interest_at(balance, rate)
    }

    /// Simple one-year interest on `balance` at an already resolved `rate`.
    pub fn interest_at(balance: Decimal, rate: RateTier) -> CoreResult<Decimal> {
        balance
            .checked_mul(rate.fraction())
            .ok_or_else(|| CoreError::Overflow(format!("interest on {balance} at {rate}")))
    }

    pub fn schedule(&self) -> &TierSchedule {
        &self.schedule
    }
}
