use crate::config::HttpConfig;
use crate::error::{Result, ScraperError};
use crate::types::PageFetcher;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Blocking HTTP client for Surf-Report forecast pages.
///
/// Issues exactly one GET per call. No retries.
pub struct SurfReportClient {
    client: Client,
    user_agent: String,
    accept_language: String,
}

impl SurfReportClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            accept_language: config.accept_language.clone(),
        })
    }
}

impl PageFetcher for SurfReportClient {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching forecast page");
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT_LANGUAGE, self.accept_language.as_str())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        let elapsed = started.elapsed().as_secs_f64();
        metrics::histogram!("surf_fetch_duration_seconds").record(elapsed);
        debug!("Fetched {} bytes in {:.2}s", body.len(), elapsed);
        Ok(body)
    }
}
