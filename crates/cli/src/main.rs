//! Tierbank CLI - balance-tiered interest rates from the command line
//!
//! Usage:
//! ```bash
//! tierbank rate 1500
//! tierbank interest 25000
//! tierbank tiers
//! tierbank --config tierbank.toml serve
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tierbank_config::{ConfigLoader, TierbankConfig};
use tierbank_core::RateTierResolver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Tierbank - resolve account balances to interest rate tiers
#[derive(Parser)]
#[command(name = "tierbank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the interest rate for a balance
    Rate {
        /// Account balance (must be non-negative)
        #[arg(allow_hyphen_values = true)]
        balance: Decimal,
    },

    /// Show one year of simple interest for a balance
    Interest {
        /// Account balance (must be non-negative)
        #[arg(allow_hyphen_values = true)]
        balance: Decimal,
    },

    /// List the tier schedule
    Tiers,

    /// Start the HTTP server
    Serve,
}

fn load_config(path: Option<&Path>) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ConfigLoader::new()),
    }
}

/// Resolver over the configured schedule, or the standard one
fn resolver_for(loader: &ConfigLoader) -> Result<RateTierResolver> {
    Ok(RateTierResolver::with_schedule(loader.get().schedule()?))
}

fn init_tracing(config: &TierbankConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = load_config(cli.config.as_deref())?;
    let config = loader.get();
    init_tracing(&config);

    match cli.command {
        Commands::Rate { balance } => {
            println!("{}", commands::rate(&resolver_for(&loader)?, balance)?);
        }

        Commands::Interest { balance } => {
            println!("{}", commands::interest(&resolver_for(&loader)?, balance)?);
        }

        Commands::Tiers => {
            print!("{}", commands::tiers(&resolver_for(&loader)?));
        }

        Commands::Serve => {
            let state = tierbank_server::AppState::new(loader)?;
            tierbank_server::serve(&config.server, state).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tierbank_core::TierSchedule;

    fn resolver_from(path: Option<&Path>) -> Result<RateTierResolver> {
        resolver_for(&load_config(path)?)
    }

    #[test]
    fn test_no_config_uses_standard_schedule() {
        let resolver = resolver_from(None).unwrap();
        assert_eq!(resolver.schedule(), &TierSchedule::standard());
    }

    #[test]
    fn test_config_file_selects_schedule() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "[[tiers]]\nmin_balance = \"0\"\nrate = \"0\"\n\n[[tiers]]\nmin_balance = \"250\"\nrate = \"0.03\"\n",
        )
        .unwrap();

        let resolver = resolver_from(Some(file.path())).unwrap();
        assert_eq!(resolver.schedule().len(), 2);
        assert_eq!(resolver.resolve_rate(dec!(249.99)).unwrap().fraction(), dec!(0));
        assert_eq!(resolver.resolve_rate(dec!(1000)).unwrap().fraction(), dec!(0.03));
    }

    #[test]
    fn test_missing_config_file_names_path() {
        let err = resolver_from(Some(Path::new("/no/such/tierbank.toml"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/tierbank.toml"));
    }

    #[test]
    fn test_cli_parses_negative_balance() {
        let cli = Cli::try_parse_from(["tierbank", "rate", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Rate { balance } if balance == dec!(-1)));
    }
}
