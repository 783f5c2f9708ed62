//! Tierbank Core - Domain types and rate resolution
//!
//! This crate contains the fundamental types used across Tierbank:
//! - `Balance`: Non-negative decimal wrapper for account balances
//! - `RateTier`: Annual interest rate fraction (0.01 = 1%)
//! - `TierSchedule`: Ordered balance thresholds and their rates
//! - `RateTierResolver`: Maps a balance to the rate of its tier

pub mod balance;
pub mod error;
pub mod rate;
pub mod resolver;
pub mod schedule;

pub use balance::Balance;
pub use error::{CoreError, CoreResult};
pub use rate::RateTier;
pub use resolver::RateTierResolver;
pub use schedule::{Tier, TierSchedule};
