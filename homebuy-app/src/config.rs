//! Session configuration.
//!
//! An optional TOML file supplies the default global variables and the
//! seed properties the table starts with. Missing file (or missing
//! sections) fall back to the built-in defaults, so the calculator
//! always comes up with something to compare.
//!
//! ```toml
//! [globals]
//! start_asset = 150000.0
//! closing = 10000.0
//! interest_rate = 3.25
//!
//! [[seed_properties]]
//! name = "88 Bleecker St 6B"
//! start_asset = 150000.0
//! asking = 475000.0
//! offer = 455000.0
//! down_payment_pct = 25.0
//! closing = 10000.0
//! interest_rate = 3.25
//! maintenance = 1073.0
//! ```

use std::path::Path;

use homebuy_core::models::{GlobalFinancialVariables, PropertyInput};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Startup configuration: shared defaults plus the initial columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub globals: GlobalFinancialVariables,

    #[serde(default = "default_seed_properties")]
    pub seed_properties: Vec<PropertyInput>,
}

impl AppConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Like [`Self::load`], but any failure logs a warning and falls
    /// back to the built-in defaults instead of aborting startup.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "using default config");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            globals: GlobalFinancialVariables::default(),
            seed_properties: default_seed_properties(),
        }
    }
}

fn default_seed_properties() -> Vec<PropertyInput> {
    let globals = GlobalFinancialVariables::default();
    vec![
        PropertyInput {
            name: "88 Bleecker St 6B".to_string(),
            start_asset: globals.start_asset,
            asking: 475_000.0,
            offer: 455_000.0,
            down_payment_pct: 25.0,
            closing: globals.closing,
            interest_rate: globals.interest_rate,
            maintenance: 1_073.0,
        },
        PropertyInput {
            name: "20 Pine St 1508".to_string(),
            start_asset: globals.start_asset,
            asking: 565_000.0,
            offer: 545_000.0,
            down_payment_pct: 25.0,
            closing: globals.closing,
            interest_rate: globals.interest_rate,
            maintenance: 574.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_has_seeds_sharing_the_globals() {
        let config = AppConfig::default();

        assert_eq!(config.seed_properties.len(), 2);
        for seed in &config.seed_properties {
            assert_eq!(seed.interest_rate, config.globals.interest_rate);
            assert_eq!(seed.closing, config.globals.closing);
        }
    }

    #[test]
    fn partial_toml_falls_back_per_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [globals]
            start_asset = 200000.0
            closing = 8000.0
            interest_rate = 4.5
            "#,
        )
        .unwrap();

        assert_eq!(config.globals.interest_rate, 4.5);
        // Seeds fall back to the built-ins.
        assert_eq!(config.seed_properties, AppConfig::default().seed_properties);
    }

    #[test]
    fn seed_properties_parse_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [[seed_properties]]
            name = "99 John St 410"
            start_asset = 120000.0
            asking = 400000.0
            offer = 390000.0
            down_payment_pct = 20.0
            closing = 9000.0
            interest_rate = 3.75
            maintenance = 820.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed_properties.len(), 1);
        assert_eq!(config.seed_properties[0].name, "99 John St 410");
        assert_eq!(config.globals, GlobalFinancialVariables::default());
    }

    #[test]
    fn load_or_default_survives_a_missing_file() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/homebuy.toml"));

        assert_eq!(config, AppConfig::default());
    }
}
