//! Configuration types

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tierbank_core::{CoreResult, Tier, TierSchedule};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierbankConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Tier table; empty means the standard schedule
    #[serde(default)]
    pub tiers: Vec<Tier>,
}

impl TierbankConfig {
    /// Build the tier schedule this configuration describes
    pub fn schedule(&self) -> CoreResult<TierSchedule> {
        if self.tiers.is_empty() {
            Ok(TierSchedule::standard())
        } else {
            TierSchedule::new(self.tiers.clone())
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TierbankConfig::default();
        assert_eq!(config.server.listen.port(), 8080);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.schedule().unwrap(), TierSchedule::standard());
    }
}
