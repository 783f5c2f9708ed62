//! Tier schedule - ordered balance thresholds and the rate each one unlocks

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::Balance;
use crate::error::{CoreError, CoreResult};
use crate::rate::RateTier;

/// Lower bound of the silver tier
pub const SILVER_THRESHOLD: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Lower bound of the gold tier
pub const GOLD_THRESHOLD: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// A single band: `rate` applies from `min_balance` (inclusive) up to the
/// next tier's lower bound (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub min_balance: Balance,
    pub rate: RateTier,
}

impl Tier {
    pub fn new(min_balance: Balance, rate: RateTier) -> Self {
        Self { min_balance, rate }
    }
}

/// Non-empty list of tiers, first starting at zero, lower bounds strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TierSchedule {
    tiers: Vec<Tier>,
}

impl TierSchedule {
    /// Validate and build a schedule.
    pub fn new(tiers: Vec<Tier>) -> CoreResult<Self> {
        let first = tiers
            .first()
            .ok_or_else(|| CoreError::InvalidSchedule("schedule has no tiers".to_string()))?;

        if !first.min_balance.is_zero() {
            return Err(CoreError::InvalidSchedule(format!(
                "first tier must start at 0, starts at {}",
                first.min_balance
            )));
        }

        for pair in tiers.windows(2) {
            if pair[1].min_balance <= pair[0].min_balance {
                return Err(CoreError::InvalidSchedule(format!(
                    "tier thresholds must be strictly ascending: {} follows {}",
                    pair[1].min_balance, pair[0].min_balance
                )));
            }
        }

        Ok(Self { tiers })
    }

    /// The standard three-band schedule:
    /// `[0, 1000)` at 1%, `[1000, 10000)` at 1.5%, `[10000, ..)` at 2%.
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                Tier::new(Balance::ZERO, RateTier::BASIC),
                Tier::new(Balance::from_const(SILVER_THRESHOLD), RateTier::SILVER),
                Tier::new(Balance::from_const(GOLD_THRESHOLD), RateTier::GOLD),
            ],
        }
    }

    /// The tier containing `balance`.
    pub fn tier_for(&self, balance: &Balance) -> &Tier {
        // tiers[0] starts at 0, so at least one tier is <= any balance
        let idx = self.tiers.partition_point(|t| t.min_balance <= *balance);
        &self.tiers[idx.saturating_sub(1)]
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tier> {
        self.tiers.iter()
    }
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a TierSchedule {
    type Item = &'a Tier;
    type IntoIter = std::slice::Iter<'a, Tier>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

impl<'de> Deserialize<'de> for TierSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tiers = Vec::<Tier>::deserialize(deserializer)?;
        TierSchedule::new(tiers).map_err(serde::de::Error::custom)
    }
}
