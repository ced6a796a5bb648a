pub mod apis;
pub mod config;
pub mod constants;
pub mod error;
pub mod locale;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod storage;
pub mod types;

pub use error::{Result, ScraperError};
pub use pipeline::{scrape_surf_report, Pipeline, PipelineResult};
pub use types::{ForecastRow, Table};
