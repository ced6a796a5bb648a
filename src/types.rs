use crate::constants::CSV_HEADERS;
use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One timestamped record block located in the page text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord<'a> {
    pub timestamp: NaiveDateTime,
    pub body: &'a str,
}

/// Numeric fields decoded from a record body. A record is only usable when all four resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecodedFields {
    pub primary_wave_height: Option<f64>,
    pub max_wave_height: Option<f64>,
    pub mean_wind_speed: Option<i64>,
    pub wind_direction_degrees: Option<i64>,
}

/// A fully decoded record, ready to be rendered into a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub timestamp: NaiveDateTime,
    pub primary_wave_height: f64,
    pub max_wave_height: f64,
    pub mean_wind_speed: i64,
    pub wind_direction_degrees: i64,
}

impl DecodedFields {
    /// Returns a complete `Forecast`, or `None` if any field is absent.
    pub fn complete(self, timestamp: NaiveDateTime) -> Option<Forecast> {
        Some(Forecast {
            timestamp,
            primary_wave_height: self.primary_wave_height?,
            max_wave_height: self.max_wave_height?,
            mean_wind_speed: self.mean_wind_speed?,
            wind_direction_degrees: self.wind_direction_degrees?,
        })
    }
}

impl Forecast {
    pub fn day_key(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// One output row of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "Date")]
    pub date_label: String,
    #[serde(rename = "Time")]
    pub time_label: String,
    #[serde(rename = "Wave_size")]
    pub wave_size_label: String,
    #[serde(rename = "Wind_speed")]
    pub wind_speed_label: String,
    #[serde(rename = "Wind_direction")]
    pub wind_direction_label: String,
}

impl ForecastRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            self.date_label.as_str(),
            self.time_label.as_str(),
            self.wave_size_label.as_str(),
            self.wind_speed_label.as_str(),
            self.wind_direction_label.as_str(),
        ]
    }
}

/// Ordered rows sharing the fixed five-column schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<ForecastRow>,
}

impl Table {
    pub fn new(rows: Vec<ForecastRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct date labels in first-seen order.
    pub fn date_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !labels.contains(&row.date_label.as_str()) {
                labels.push(&row.date_label);
            }
        }
        labels
    }

    /// Renders the first `limit` rows as right-aligned text columns with a header line.
    pub fn render(&self, limit: usize) -> String {
        let shown = &self.rows[..self.rows.len().min(limit)];

        let mut widths = CSV_HEADERS.map(|h| h.chars().count());
        for row in shown {
            for (w, cell) in widths.iter_mut().zip(row.cells()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = render_line(&CSV_HEADERS, &widths);
        for row in shown {
            out.push('\n');
            out.push_str(&render_line(&row.cells(), &widths));
        }
        out
    }
}

fn render_line(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Source of page text for the pipeline.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}
