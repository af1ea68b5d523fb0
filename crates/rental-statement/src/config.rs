use crate::error::{Result, StatementError};
use crate::formatting::StatementFormat;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "rental-statement.toml";
pub const ENV_PREFIX: &str = "RENTAL_STATEMENT_";

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Formatter identifier used when `--format` is not given
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: StatementFormat::PlainText.as_str().to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter applied when neither `-v/-q` nor `RUST_LOG` is set
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "rental_statement=info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatementConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl StatementConfig {
    /// Defaults, then the TOML file, then `RENTAL_STATEMENT_*` environment variables.
    ///
    /// Without an explicit path, `rental-statement.toml` in the working
    /// directory is merged when present.
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(StatementConfig::default()));

        match path_override {
            Some(path) => {
                if !path.exists() {
                    return Err(StatementError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    figment = figment.merge(Toml::file(default_path));
                }
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: StatementConfig = figment
            .extract()
            .map_err(|e| StatementError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.default_format().map(|_| ())
    }

    pub fn default_format(&self) -> Result<StatementFormat> {
        self.output.default_format.parse()
    }

    pub fn generate_example() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| StatementError::Config(format!("failed to serialize config: {e}")))
    }
}
