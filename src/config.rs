use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Market rules: whitelists, defaults and rate tables. Built once at startup
// and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketConfig {
    pub valid_languages: Vec<String>,
    pub default_language: String,
    pub valid_currencies: Vec<String>,
    pub default_currency: String,
    pub valid_nationalities: Vec<String>,
    pub default_nationality: String,
    pub default_market: String,
    pub default_net_price: f64,
    pub default_exchange_rate: f64,
    pub default_markup: f64,
    pub exchange_rates: HashMap<String, f64>,
    pub markup_rates: HashMap<String, f64>,
    pub rules: RequestRules,
}

// Business constraints applied by the request extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestRules {
    pub min_lead_days: i64,
    pub min_stay_nights: i64,
    pub default_options_quota: u32,
}

impl Default for RequestRules {
    fn default() -> Self {
        Self {
            min_lead_days: 2,
            min_stay_nights: 3,
            default_options_quota: 20,
        }
    }
}

fn codes(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn rates(values: &[(&str, f64)]) -> HashMap<String, f64> {
    values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            valid_languages: codes(&["en", "es", "fr", "de", "it"]),
            default_language: "en".to_string(),
            valid_currencies: codes(&["EUR", "USD", "GBP"]),
            default_currency: "EUR".to_string(),
            valid_nationalities: codes(&["US", "GB", "CA", "ES", "FR", "DE"]),
            default_nationality: "US".to_string(),
            default_market: "ES".to_string(),
            default_net_price: 132.42,
            default_exchange_rate: 1.0,
            default_markup: 3.2,
            // USD has no entry and resolves to the default rate
            exchange_rates: rates(&[("EUR", 1.0), ("GBP", 0.85)]),
            markup_rates: rates(&[("US", 3.2), ("GB", 2.5), ("CA", 3.0), ("ES", 2.0)]),
            rules: RequestRules::default(),
        }
    }
}

impl MarketConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MarketConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Checks that every default sits inside its own whitelist and that all
    /// rates are usable multipliers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let whitelists = [
            ("language", &self.default_language, &self.valid_languages),
            ("currency", &self.default_currency, &self.valid_currencies),
            (
                "nationality",
                &self.default_nationality,
                &self.valid_nationalities,
            ),
        ];
        for (name, default, valid) in whitelists {
            if !valid.contains(default) {
                return Err(ConfigError::Invalid(format!(
                    "default {name} '{default}' is not in the valid {name} list"
                )));
            }
        }

        let positive = std::iter::once(("default_exchange_rate", self.default_exchange_rate))
            .chain(std::iter::once(("default_net_price", self.default_net_price)))
            .chain(
                self.exchange_rates
                    .iter()
                    .map(|(code, rate)| (code.as_str(), *rate)),
            );
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let markups = std::iter::once(("default_markup", self.default_markup)).chain(
            self.markup_rates
                .iter()
                .map(|(code, markup)| (code.as_str(), *markup)),
        );
        for (name, value) in markups {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "markup {name} must be finite, got {value}"
                )));
            }
        }

        if self.rules.min_lead_days < 0 || self.rules.min_stay_nights < 0 {
            return Err(ConfigError::Invalid(
                "request rules must not be negative".to_string(),
            ));
        }

        Ok(())
    }

    pub fn coerce_language(&self, value: Option<&str>) -> String {
        coerce(value, &self.valid_languages, &self.default_language)
    }

    pub fn coerce_currency(&self, value: Option<&str>) -> String {
        coerce(value, &self.valid_currencies, &self.default_currency)
    }

    pub fn coerce_nationality(&self, value: Option<&str>) -> String {
        coerce(value, &self.valid_nationalities, &self.default_nationality)
    }

    pub fn exchange_rate_for(&self, currency: &str) -> f64 {
        self.exchange_rates
            .get(currency)
            .copied()
            .unwrap_or(self.default_exchange_rate)
    }

    pub fn markup_for(&self, nationality: &str) -> f64 {
        self.markup_rates
            .get(nationality)
            .copied()
            .unwrap_or(self.default_markup)
    }
}

// Whitelist fallback: out-of-set values are replaced, never rejected
fn coerce(value: Option<&str>, valid: &[String], default: &str) -> String {
    match value {
        Some(v) if valid.iter().any(|code| code == v) => v.to_string(),
        _ => default.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub market_config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Loads `.env` (if present) and reads the server settings from the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let or_default =
            |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

        let bind_raw = or_default("HOTEL_OFFER_BIND_ADDR", "0.0.0.0:8000");
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "HOTEL_OFFER_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let log_level = or_default("HOTEL_OFFER_LOG_LEVEL", "info");
        let market_config_path = lookup("HOTEL_OFFER_MARKET_CONFIG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            log_level,
            market_config_path,
        })
    }

    pub fn market_config(&self) -> Result<MarketConfig, ConfigError> {
        match &self.market_config_path {
            Some(path) => MarketConfig::from_json_file(path),
            None => Ok(MarketConfig::default()),
        }
    }
}
