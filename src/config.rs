use crate::services::risk::{RiskLimits, DEFAULT_STOP_LOSS, DEFAULT_TAKE_PROFIT};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors detected at startup.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Supabase project connection settings.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g. https://xyz.supabase.co).
    pub url: String,
    /// Service key sent with every request.
    pub key: String,
}

/// Which trade store backend to construct.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// Remote Supabase table.
    Supabase(SupabaseConfig),
    /// In-process store, contents lost on restart.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Table holding trade rows.
    pub trades_table: String,
    /// Timeout for each store request (seconds).
    pub store_timeout_secs: u64,
    /// Default risk multipliers for risk evaluation requests.
    pub risk: RiskLimits,
    /// Trade store backend.
    pub store: StoreBackend,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store = match var("TRADE_STORE").as_deref() {
            None | Some("supabase") => StoreBackend::Supabase(SupabaseConfig {
                url: var("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
                key: var("SUPABASE_KEY").ok_or(ConfigError::Missing("SUPABASE_KEY"))?,
            }),
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "TRADE_STORE",
                    value: other.to_string(),
                })
            }
        };

        let risk = RiskLimits::new(
            var("RISK_STOP_LOSS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_STOP_LOSS),
            var("RISK_TAKE_PROFIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TAKE_PROFIT),
        );

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(5002),
            trades_table: var("TRADES_TABLE").unwrap_or_else(|| "trades".to_string()),
            // A zero timeout would fail every store request
            store_timeout_secs: var("STORE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .unwrap_or(10),
            risk,
            store,
        })
    }

    /// Address to bind the HTTP listener to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}
