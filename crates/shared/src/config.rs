//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Statement engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Output configuration for the command-line front end.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Statement engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Tolerance used for balance checks and rounding guards.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
    /// Explicit period sequence, oldest first.
    ///
    /// When unset, periods are ordered by their labels.
    #[serde(default)]
    pub period_order: Option<Vec<String>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            period_order: None,
        }
    }
}

fn default_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default output format (`json` or `table`).
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "json".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `MIZAN__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MIZAN")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("engine.period_order")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "MIZAN__ENGINE__TOLERANCE",
                "MIZAN__ENGINE__PERIOD_ORDER",
                "MIZAN__OUTPUT__FORMAT",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.engine.tolerance, dec!(0.01));
                assert!(config.engine.period_order.is_none());
                assert_eq!(config.output.format, "json");
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("MIZAN__ENGINE__TOLERANCE", Some("0.5")),
                ("MIZAN__ENGINE__PERIOD_ORDER", Some("FY-Q4,FY-Q1")),
                ("MIZAN__OUTPUT__FORMAT", Some("table")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.engine.tolerance, dec!(0.5));
                assert_eq!(
                    config.engine.period_order,
                    Some(vec!["FY-Q4".to_string(), "FY-Q1".to_string()])
                );
                assert_eq!(config.output.format, "table");
            },
        );
    }
}
