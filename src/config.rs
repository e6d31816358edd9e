use crate::ai::ModelConfig;
use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_STRATEGY: &str = "KARTU_STRATEGY";
pub const ENV_POOL_DIR: &str = "KARTU_POOL_DIR";
pub const ENV_MODEL: &str = "KARTU_MODEL";
pub const ENV_TEMPERATURE: &str = "KARTU_TEMPERATURE";
pub const ENV_MAX_TOKENS: &str = "KARTU_MAX_TOKENS";
pub const ENV_TIMEOUT_SECS: &str = "KARTU_AI_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "KARTU_LOG_FILE";

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_LOG_FILE: &str = "kartu_kata.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Static,
    Generative,
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" | "pool" => Ok(StrategyKind::Static),
            "ai" | "generative" => Ok(StrategyKind::Generative),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Everything decided at process start. Read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub strategy: StrategyKind,
    pub pool_dir: Option<PathBuf>,
    pub model: ModelConfig,
    pub request_timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            pool_dir: None,
            model: ModelConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_STRATEGY) {
            config.strategy = value.parse()?;
        }
        if let Some(value) = get(ENV_POOL_DIR) {
            config.pool_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = get(ENV_MODEL) {
            config.model.model = value.trim().to_string();
        }
        if let Some(value) = get(ENV_TEMPERATURE) {
            config.model.temperature = Some(parse_number(ENV_TEMPERATURE, &value)?);
        }
        if let Some(value) = get(ENV_MAX_TOKENS) {
            config.model.max_tokens = Some(parse_number(ENV_MAX_TOKENS, &value)?);
        }
        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &value)?);
        }
        if let Some(value) = get(ENV_LOG_FILE) {
            config.log_file = PathBuf::from(value);
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.strategy, StrategyKind::Static);
        assert!(config.pool_dir.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_strategy_aliases() {
        assert_eq!("static".parse::<StrategyKind>().unwrap(), StrategyKind::Static);
        assert_eq!("AI".parse::<StrategyKind>().unwrap(), StrategyKind::Generative);
        assert_eq!(
            " generative ".parse::<StrategyKind>().unwrap(),
            StrategyKind::Generative
        );
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(matches!(
            config_from(&[(ENV_STRATEGY, "gpt")]),
            Err(ConfigError::UnknownStrategy(s)) if s == "gpt"
        ));
    }

    #[test]
    fn test_full_generative_config() {
        let config = config_from(&[
            (ENV_STRATEGY, "ai"),
            (ENV_MODEL, "openai/gpt-4o-mini"),
            (ENV_TEMPERATURE, "0.5"),
            (ENV_MAX_TOKENS, "80"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_LOG_FILE, "/tmp/kartu.log"),
        ])
        .unwrap();

        assert_eq!(config.strategy, StrategyKind::Generative);
        assert_eq!(config.model.model, "openai/gpt-4o-mini");
        assert_eq!(config.model.temperature, Some(0.5));
        assert_eq!(config.model.max_tokens, Some(80));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_file, PathBuf::from("/tmp/kartu.log"));
    }

    #[test]
    fn test_bad_number_names_the_key() {
        match config_from(&[(ENV_MAX_TOKENS, "lots")]) {
            Err(ConfigError::InvalidNumber { key, value }) => {
                assert_eq!(key, ENV_MAX_TOKENS);
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = config_from(&[(ENV_STRATEGY, "  "), (ENV_POOL_DIR, "")]).unwrap();
        assert_eq!(config.strategy, StrategyKind::Static);
        assert!(config.pool_dir.is_none());
    }
}
