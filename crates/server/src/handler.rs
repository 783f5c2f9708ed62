//! Request handlers

use axum::extract::{Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tierbank_core::{RateTier, TierSchedule};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Static liveness check; never touches the resolver
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct RateQuery {
    pub balance: Decimal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateResponse {
    pub balance: Decimal,
    pub rate: RateTier,
    pub percent: Decimal,
}

pub async fn rate(
    State(state): State<AppState>,
    Query(query): Query<RateQuery>,
) -> Result<Json<RateResponse>, ApiError> {
    let rate = state.resolver().resolve_rate(query.balance)?;
    Ok(Json(RateResponse {
        balance: query.balance,
        rate,
        percent: rate.percent(),
    }))
}

pub async fn tiers(State(state): State<AppState>) -> Json<TierSchedule> {
    Json(state.resolver().schedule().clone())
}

/// Re-read the config file and return the schedule now in effect
pub async fn reload(State(state): State<AppState>) -> Result<Json<TierSchedule>, ApiError> {
    let resolver = state.reload()?;
    Ok(Json(resolver.schedule().clone()))
}
