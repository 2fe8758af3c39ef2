//! Service configuration.
//!
//! Loaded from a TOML file, then overridden by environment variables (a
//! `.env` file is honoured via `dotenv`). Every key is optional:
//!
//! ```toml
//! [provider]
//! source = "live"          # or "synthetic" ("jma" / "mock" also accepted)
//! timeout_secs = 10
//! connect_timeout_secs = 5
//! seed = 42                # synthetic generator seed
//!
//! [logging]
//! level = "info"
//! file = "infrascope.log"
//! timestamps = true
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::logging::LogLevel;

pub const DEFAULT_CONFIG_PATH: &str = "infrascope.toml";

pub const ENV_SOURCE: &str = "INFRASCOPE_SOURCE";
pub const ENV_SEED: &str = "INFRASCOPE_SEED";
pub const ENV_LOG_LEVEL: &str = "INFRASCOPE_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "INFRASCOPE_LOG_FILE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// JMA feeds, falling back to synthetic data per collection.
    #[serde(alias = "jma")]
    Live,
    #[serde(alias = "mock")]
    Synthetic,
}

impl SourceKind {
    fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" | "jma" => Ok(SourceKind::Live),
            "synthetic" | "mock" => Ok(SourceKind::Synthetic),
            other => Err(ConfigError::Invalid(format!("unknown source '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub source: SourceKind,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub seed: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Live,
            timeout_secs: 10,
            connect_timeout_secs: 5,
            seed: None,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn min_level(&self) -> Result<LogLevel, ConfigError> {
        self.level.parse().map_err(ConfigError::Invalid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists (defaults otherwise), then applies
    /// `.env` and environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut config = if path.exists() {
            Self::from_toml(&std::fs::read_to_string(path)?)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from a key lookup. Split out from `load` so tests
    /// don't have to mutate the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_SOURCE) {
            self.provider.source = SourceKind::parse(&source)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            let seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{} must be an integer, got '{}'", ENV_SEED, seed)))?;
            self.provider.seed = Some(seed);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.logging.file = Some(file).filter(|f| !f.trim().is_empty());
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::Invalid("provider.timeout_secs must be positive".into()));
        }
        if self.provider.connect_timeout_secs > self.provider.timeout_secs {
            return Err(ConfigError::Invalid(
                "provider.connect_timeout_secs cannot exceed provider.timeout_secs".into(),
            ));
        }
        self.logging.min_level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.provider.source, SourceKind::Live);
        assert_eq!(config.provider.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [provider]
            source = "synthetic"
            seed = 42

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.provider.source, SourceKind::Synthetic);
        assert_eq!(config.provider.seed, Some(42));
        assert_eq!(config.provider.connect_timeout_secs, 5);
        assert_eq!(config.logging.min_level().unwrap(), LogLevel::Debug);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_source_aliases_match_env_parsing() {
        for (text, expected) in [
            ("jma", SourceKind::Live),
            ("live", SourceKind::Live),
            ("mock", SourceKind::Synthetic),
            ("synthetic", SourceKind::Synthetic),
        ] {
            let config = Config::from_toml(&format!("[provider]\nsource = \"{}\"", text)).unwrap();
            assert_eq!(config.provider.source, expected, "toml source '{}'", text);
            assert_eq!(SourceKind::parse(text).unwrap(), expected, "env source '{}'", text);
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_toml("[provider]\ntimeout_secs = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[logging]\nlevel = \"loud\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[provider]\nsource = \"carrier-pigeon\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_SOURCE, "mock"),
            (ENV_SEED, "7"),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_FILE, "/tmp/infrascope.log"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.provider.source, SourceKind::Synthetic);
        assert_eq!(config.provider.seed, Some(7));
        assert_eq!(config.logging.min_level().unwrap(), LogLevel::Warning);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/infrascope.log"));
    }

    #[test]
    fn test_bad_seed_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| (key == ENV_SEED).then(|| "abc".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
