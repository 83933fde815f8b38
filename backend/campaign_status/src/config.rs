//! Display and timing configuration loaded from environment variables.

use crate::errors::{Result, StatusError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// How long (in seconds) after the presale opens a campaign counts as new
    pub new_window_secs: u64,
    /// How close (in seconds) to the close an active campaign counts as ending soon
    pub ending_soon_secs: u64,
    /// Ticker shown next to raised amounts (e.g. ETH)
    pub asset_symbol: String,
    /// Decimals of the funding asset's base unit (18 for wei)
    pub asset_decimals: u32,
    /// Fraction digits kept when displaying raised amounts
    pub display_decimals: u32,
    /// Fraction digits kept when displaying percent of goal
    pub percent_precision: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        StatusConfig {
            new_window_secs: 86_400,
            ending_soon_secs: 86_400,
            asset_symbol: "ETH".to_string(),
            asset_decimals: 18,
            display_decimals: 5,
            percent_precision: 0,
        }
    }
}

impl StatusConfig {
    /// Load an optional `.env` file (ignored if missing), then read the environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        let defaults = StatusConfig::default();
        Ok(StatusConfig {
            new_window_secs: parse_or("CAMPAIGN_NEW_WINDOW_SECS", defaults.new_window_secs)?,
            ending_soon_secs: parse_or("CAMPAIGN_ENDING_SOON_SECS", defaults.ending_soon_secs)?,
            asset_symbol: env_var("CAMPAIGN_ASSET_SYMBOL").unwrap_or(defaults.asset_symbol),
            asset_decimals: parse_or("CAMPAIGN_ASSET_DECIMALS", defaults.asset_decimals)?,
            display_decimals: parse_or("CAMPAIGN_DISPLAY_DECIMALS", defaults.display_decimals)?,
            percent_precision: parse_or("CAMPAIGN_PERCENT_PRECISION", defaults.percent_precision)?,
        })
        .and_then(StatusConfig::validate)
    }

    fn validate(self) -> Result<Self> {
        // 10^38 is the largest power of ten a u128 holds.
        if self.asset_decimals > 38 {
            return Err(StatusError::Config(
                "CAMPAIGN_ASSET_DECIMALS must be at most 38".to_string(),
            ));
        }
        if self.display_decimals > self.asset_decimals {
            return Err(StatusError::Config(
                "CAMPAIGN_DISPLAY_DECIMALS cannot exceed CAMPAIGN_ASSET_DECIMALS".to_string(),
            ));
        }
        if self.percent_precision > 18 {
            return Err(StatusError::Config(
                "CAMPAIGN_PERCENT_PRECISION must be at most 18".to_string(),
            ));
        }
        Ok(self)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env_var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| StatusError::Config(format!("Invalid {key}"))),
        Err(_) => Ok(default),
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| StatusError::Config(format!("Missing env var: {key}")))
}
