use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("No forecast data extracted: {0}")]
    DataExtraction(String),

    #[error("Failed to persist {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScraperError {
    /// True for failures to reach the page or get a successful response from it.
    pub fn is_network(&self) -> bool {
        matches!(self, ScraperError::Network(_) | ScraperError::HttpStatus { .. })
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        ScraperError::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
