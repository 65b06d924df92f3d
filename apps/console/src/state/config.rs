//! # Configuration State
//!
//! Stores shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`TABLETREAT_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use tabletreat_core::Money;

use crate::error::StartupError;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// JSON catalog to load. `None` uses the embedded sample catalog.
    pub catalog_path: Option<PathBuf>,

    /// Currency symbol for text output
    pub currency_symbol: String,

    /// Pins "today" for reservation date checks (demos, scripted runs).
    /// `None` uses the local calendar date.
    pub today: Option<NaiveDate>,

    /// How responses are printed
    pub output: OutputFormat,
}

/// Response rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per command
    #[default]
    Json,

    /// Human-readable summary
    Text,
}

impl Default for ConfigState {
    /// Defaults: sample catalog, USD, local date, JSON output.
    fn default() -> Self {
        ConfigState {
            catalog_path: None,
            currency_symbol: "$".to_string(),
            today: None,
            output: OutputFormat::Json,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TABLETREAT_CATALOG_PATH`: JSON catalog file
    /// - `TABLETREAT_CURRENCY_SYMBOL`: e.g. "€"
    /// - `TABLETREAT_TODAY`: pinned date, `YYYY-MM-DD`
    /// - `TABLETREAT_OUTPUT`: `json` or `text`
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("TABLETREAT_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("TABLETREAT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(today) = lookup("TABLETREAT_TODAY") {
            let date = today.parse::<NaiveDate>().map_err(|e| StartupError::Config {
                key: "TABLETREAT_TODAY".to_string(),
                reason: e.to_string(),
            })?;
            config.today = Some(date);
        }

        if let Some(output) = lookup("TABLETREAT_OUTPUT") {
            config.output =
                OutputFormat::from_str(&output, true).map_err(|reason| StartupError::Config {
                    key: "TABLETREAT_OUTPUT".to_string(),
                    reason,
                })?;
        }

        Ok(config)
    }

    /// Formats an amount with the configured symbol, e.g. `$33.98`.
    ///
    /// ## Example
    /// ```rust
    /// use tabletreat_console::state::ConfigState;
    /// use tabletreat_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(3398)), "$33.98");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let cents = amount.cents().unsigned_abs();
        format!("{sign}{}{}.{:02}", self.currency_symbol, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.currency_symbol, "$");
        assert!(config.today.is_none());
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("TABLETREAT_CATALOG_PATH", "/tmp/catalog.json"),
            ("TABLETREAT_CURRENCY_SYMBOL", "€"),
            ("TABLETREAT_TODAY", "2026-10-17"),
            ("TABLETREAT_OUTPUT", "TEXT"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.format_money(Money::from_cents(1699)), "€16.99");
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 10, 17));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_bad_env_values() {
        let err = ConfigState::from_lookup(lookup(&[("TABLETREAT_TODAY", "tomorrow")])).unwrap_err();
        assert!(matches!(err, StartupError::Config { ref key, .. } if key == "TABLETREAT_TODAY"));

        assert!(ConfigState::from_lookup(lookup(&[("TABLETREAT_OUTPUT", "xml")])).is_err());
    }

    #[test]
    fn test_format_money() {
        let config = ConfigState::default();
        assert_eq!(config.format_money(Money::from_cents(3398)), "$33.98");
        assert_eq!(config.format_money(Money::from_cents(5)), "$0.05");
        assert_eq!(config.format_money(Money::zero()), "$0.00");
        assert_eq!(config.format_money(Money::from_cents(-1250)), "-$12.50");
    }
}
