use rahgozar_catalog::QuoteConfig;
use rahgozar_core::Language;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "RAHGOZAR";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleConfig,
    pub preferences: PreferencesConfig,
    pub latency: LatencyConfig,
    pub transactions: TransactionConfig,
    pub quotes: QuoteConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LocaleConfig {
    pub language: Language,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PreferencesConfig {
    /// JSON file for the theme preference. In-memory when unset.
    pub path: Option<String>,
}

/// Simulated payment delay, per wizard.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LatencyConfig {
    pub default_ms: u64,
    pub per_flow: HashMap<String, u64>,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            default_ms: default_latency_ms(),
            per_flow: HashMap::new(),
        }
    }
}

fn default_latency_ms() -> u64 {
    1500
}

impl LatencyConfig {
    pub fn for_flow(&self, flow: &str) -> Duration {
        let ms = self.per_flow.get(flow).copied().unwrap_or(self.default_ms);
        Duration::from_millis(ms)
    }

    /// No waiting at all; used by tests and scripted runs.
    pub fn instant() -> Self {
        Self {
            default_ms: 0,
            per_flow: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TransactionConfig {
    /// Fixed seed for reproducible transaction IDs.
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Layers `default`, `{run_mode}` and `local` files from `dir`, then
    /// `RAHGOZAR__SECTION__KEY` environment variables. Every file is optional.
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };
        let s = config::Config::builder()
            .add_source(file("default"))
            .add_source(file(run_mode))
            // not checked in
            .add_source(file("local"))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(raw: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.locale.language, Language::Fa);
        assert!(config.preferences.path.is_none());
        assert!(config.transactions.seed.is_none());
        assert_eq!(config.latency.for_flow("anything"), Duration::from_millis(1500));
        assert_eq!(config.quotes.min_fee_rial, 100_000);
    }

    #[test]
    fn test_per_flow_latency_overrides_default() {
        let config = Config::from_toml(
            r#"
            [latency]
            default_ms = 400

            [latency.per_flow]
            gift_card_purchase = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.latency.for_flow("gift_card_purchase"), Duration::from_millis(50));
        assert_eq!(config.latency.for_flow("currency_purchase"), Duration::from_millis(400));
    }

    #[test]
    fn test_partial_quote_table() {
        let config = Config::from_toml(
            r#"
            [locale]
            language = "en"

            [quotes]
            min_fee_rial = 250000

            [transactions]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.locale.language, Language::En);
        assert_eq!(config.quotes.min_fee_rial, 250_000);
        assert_eq!(config.quotes.service_fee_bps, 100);
        assert_eq!(config.transactions.seed, Some(7));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = Config::from_toml("[locale]\nlanguage = \"de\"\n");
        assert!(result.is_err());
    }
}
