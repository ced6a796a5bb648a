use crate::apis::SurfReportClient;
use crate::config::Config;
use crate::constants::{is_target_time, MAX_DAYS};
use crate::error::{Result, ScraperError};
use crate::locale::Labels;
use crate::parser::{fields, PhpDumpExtractor, RecordExtractor};
use crate::storage;
use crate::types::{Forecast, ForecastRow, PageFetcher, Table};
use chrono::NaiveDate;
use metrics::counter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub table: Table,
    pub output_file: PathBuf,
}

/// Admits records until the first `limit` distinct calendar days have been seen.
///
/// Once a record from an additional day shows up, the cutoff closes for good:
/// later records are refused even if their day was already admitted.
#[derive(Debug)]
pub struct DayCutoff {
    limit: usize,
    seen_days: Vec<NaiveDate>,
    done: bool,
}

impl DayCutoff {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen_days: Vec::with_capacity(limit),
            done: false,
        }
    }

    pub fn admit(&mut self, day: NaiveDate) -> bool {
        if self.done {
            return false;
        }
        if !self.seen_days.contains(&day) {
            if self.seen_days.len() >= self.limit {
                self.done = true;
                return false;
            }
            self.seen_days.push(day);
        }
        true
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn seen_days(&self) -> &[NaiveDate] {
        &self.seen_days
    }
}

pub struct Pipeline {
    config: Config,
    fetcher: Box<dyn PageFetcher>,
    extractor: Box<dyn RecordExtractor>,
    labels: Labels,
}

impl Pipeline {
    /// Builds a pipeline that fetches over HTTP and parses the PHP dump block.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = SurfReportClient::new(&config.http)?;
        Ok(Self::with_parts(
            config,
            Box::new(fetcher),
            Box::new(PhpDumpExtractor::new()),
        ))
    }

    pub fn with_parts(
        config: Config,
        fetcher: Box<dyn PageFetcher>,
        extractor: Box<dyn RecordExtractor>,
    ) -> Self {
        Self {
            config,
            fetcher,
            extractor,
            labels: Labels::default(),
        }
    }

    /// Fetches `url`, builds the forecast table and writes it as CSV.
    ///
    /// Nothing is written when fetching or extraction fails.
    #[instrument(skip(self, out))]
    pub fn run(&self, url: &str, out: Option<&Path>) -> Result<PipelineResult> {
        info!("Starting surf forecast pipeline");
        let page = self.fetcher.fetch(url)?;
        let table = self.build_table(&page)?;

        let output_file = storage::resolve_output_path(out, &self.config.output.file_name)?;
        storage::write_csv(&output_file, &table)?;
        counter!("surf_rows_written_total").increment(table.len() as u64);
        info!("CSV saved: {}", output_file.display());

        Ok(PipelineResult { table, output_file })
    }

    /// Extracts, filters, orders and windows the records found in `text`.
    pub fn build_table(&self, text: &str) -> Result<Table> {
        let mut forecasts = self.collect_forecasts(text);
        if forecasts.is_empty() {
            return Err(ScraperError::DataExtraction(
                "the page may have changed or does not contain the forecast block".to_string(),
            ));
        }

        // Stable sort keeps document order for identical timestamps
        forecasts.sort_by_key(|f| f.timestamp);

        let mut cutoff = DayCutoff::new(MAX_DAYS);
        let rows: Vec<ForecastRow> = forecasts
            .iter()
            .take_while(|f| cutoff.admit(f.day_key()))
            .map(|f| self.to_row(f))
            .collect();

        info!(
            "Built table with {} rows over {} days",
            rows.len(),
            cutoff.seen_days().len()
        );
        Ok(Table::new(rows))
    }

    fn collect_forecasts(&self, text: &str) -> Vec<Forecast> {
        let mut extracted = 0usize;
        let mut off_window = 0usize;
        let mut incomplete = 0usize;
        let mut forecasts = Vec::new();

        for record in self.extractor.extract_records(text) {
            extracted += 1;
            let time_label = record.timestamp.format("%H:%M").to_string();
            if !is_target_time(&time_label) {
                off_window += 1;
                continue;
            }
            match fields::decode(record.body).complete(record.timestamp) {
                Some(forecast) => forecasts.push(forecast),
                None => {
                    debug!("Dropping incomplete record at {}", record.timestamp);
                    incomplete += 1;
                }
            }
        }

        counter!("surf_records_extracted_total").increment(extracted as u64);
        counter!("surf_records_dropped_total").increment((off_window + incomplete) as u64);
        info!(
            "Extractor {} found {} records ({} outside time window, {} incomplete)",
            self.extractor.name(),
            extracted,
            off_window,
            incomplete
        );
        forecasts
    }

    fn to_row(&self, forecast: &Forecast) -> ForecastRow {
        ForecastRow {
            date_label: self.labels.format_date_label(&forecast.timestamp),
            time_label: forecast.timestamp.format("%H:%M").to_string(),
            wave_size_label: format!(
                "{:.1}m - {:.1}m",
                forecast.primary_wave_height, forecast.max_wave_height
            ),
            wind_speed_label: format!("{}km/h", forecast.mean_wind_speed),
            wind_direction_label: self
                .labels
                .degrees_to_label(forecast.wind_direction_degrees)
                .to_string(),
        }
    }
}

/// Scrapes one forecast page with the default configuration and saves it as CSV.
pub fn scrape_surf_report(url: &str, out: Option<&Path>) -> Result<PipelineResult> {
    Pipeline::new(Config::default())?.run(url, out)
}
