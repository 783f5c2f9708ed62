//! Command output, kept separate from argument parsing so it can be tested

use anyhow::Result;
use rust_decimal::Decimal;
use std::fmt::Write;
use tierbank_core::RateTierResolver;

/// `tierbank rate <BALANCE>`
pub fn rate(resolver: &RateTierResolver, balance: Decimal) -> Result<String> {
    let rate = resolver.resolve_rate(balance)?;
    Ok(format!("{balance} -> {rate} ({}%)", rate.percent()))
}

/// `tierbank interest <BALANCE>`
pub fn interest(resolver: &RateTierResolver, balance: Decimal) -> Result<String> {
    let rate = resolver.resolve_rate(balance)?;
    let interest = RateTierResolver::interest_at(balance, rate)?;
    Ok(format!(
        "{balance} at {}% -> {} per year",
        rate.percent(),
        interest.round_dp(2)
    ))
}

/// `tierbank tiers`
pub fn tiers(resolver: &RateTierResolver) -> String {
    let tiers = resolver.schedule().tiers();
    let mut out = String::new();
    for (i, tier) in tiers.iter().enumerate() {
        let upper = tiers
            .get(i + 1)
            .map(|next| format!("< {}", next.min_balance))
            .unwrap_or_else(|| "and above".to_string());
        let _ = writeln!(
            out,
            ">= {} {}: {}%",
            tier.min_balance,
            upper,
            tier.rate.percent()
        );
    }
    out
}
