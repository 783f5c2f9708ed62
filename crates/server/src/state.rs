//! Shared handler state

use arc_swap::ArcSwap;
use std::sync::Arc;
use tierbank_config::{ConfigError, ConfigLoader};
use tierbank_core::RateTierResolver;

/// State shared by all handlers.
///
/// The resolver is rebuilt from the loader on reload and swapped in whole;
/// in-flight requests keep the snapshot they loaded.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    resolver: Arc<ArcSwap<RateTierResolver>>,
}

impl AppState {
    /// Build state from a loaded configuration
    pub fn new(config: ConfigLoader) -> Result<Self, ConfigError> {
        let resolver = RateTierResolver::with_schedule(config.get().schedule()?);
        Ok(Self {
            config: Arc::new(config),
            resolver: Arc::new(ArcSwap::from_pointee(resolver)),
        })
    }

    /// State over a fixed resolver with no backing config file
    pub fn with_resolver(resolver: RateTierResolver) -> Self {
        Self {
            config: Arc::new(ConfigLoader::new()),
            resolver: Arc::new(ArcSwap::from_pointee(resolver)),
        }
    }

    /// Current resolver snapshot
    pub fn resolver(&self) -> Arc<RateTierResolver> {
        self.resolver.load_full()
    }

    /// Re-read the config file and swap in a resolver over its schedule.
    ///
    /// On failure the current resolver stays in place.
    pub fn reload(&self) -> Result<Arc<RateTierResolver>, ConfigError> {
        self.config.reload()?;
        let resolver = Arc::new(RateTierResolver::with_schedule(
            self.config.get().schedule()?,
        ));
        self.resolver.store(Arc::clone(&resolver));
        tracing::info!(tiers = resolver.schedule().len(), "rate schedule swapped");
        Ok(resolver)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_resolver(RateTierResolver::new())
    }
}
