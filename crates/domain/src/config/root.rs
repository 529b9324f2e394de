use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

/// Main configuration structure for rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Iterative resolution settings (timeout, step bound, seed table)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub query_timeout_secs: Option<u64>,
    pub max_steps: Option<u32>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("rootwalk.toml").exists() {
            Self::from_file("rootwalk.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, cli_overrides: CliOverrides) {
        if let Some(timeout) = cli_overrides.query_timeout_secs {
            self.resolver.query_timeout_secs = timeout;
        }
        if let Some(max_steps) = cli_overrides.max_steps {
            self.resolver.max_steps = max_steps;
        }
        if let Some(level) = cli_overrides.log_level {
            self.logging.level = level;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.resolver.max_steps == 0 {
            return Err(ConfigError::Validation(
                "max_steps must be at least 1".to_string(),
            ));
        }
        if self.resolver.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "root_servers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
