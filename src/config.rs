use crate::constants::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECONDS,
    DEFAULT_USER_AGENT,
};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_seconds: u64,
    /// Honour proxy settings from the environment (`HTTP_PROXY`, `HTTPS_PROXY`).
    pub system_proxy: bool,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            system_proxy: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name used when no output path, or a directory, is given.
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, JSON logs are also written to daily files in this directory.
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Loads `surf_scraper.toml` from the working directory, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.http.timeout_seconds == 0 {
            return Err(ScraperError::Config(
                "http.timeout_seconds must be greater than zero".into(),
            ));
        }
        if self.output.file_name.trim().is_empty() {
            return Err(ScraperError::Config("output.file_name must not be empty".into()));
        }
        Ok(())
    }
}
