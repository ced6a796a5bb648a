use crate::constants::CSV_HEADERS;
use crate::error::{Result, ScraperError};
use crate::types::{ForecastRow, Table};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves where the CSV is written.
///
/// - `None` → `<cwd>/<file_name>`
/// - an existing directory → `<dir>/<file_name>`
/// - anything else is used as given
pub fn resolve_output_path(requested: Option<&Path>, file_name: &str) -> Result<PathBuf> {
    match requested {
        None => {
            let cwd = std::env::current_dir().map_err(|e| ScraperError::persistence(".", e))?;
            Ok(cwd.join(file_name))
        }
        Some(path) if path.is_dir() => Ok(path.join(file_name)),
        Some(path) => Ok(path.to_path_buf()),
    }
}

/// Writes the table as UTF-8 CSV with a header row, creating parent directories as needed.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScraperError::persistence(parent, e))?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ScraperError::persistence(path, e))?;

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| ScraperError::persistence(path, e))?;
    for row in &table.rows {
        writer
            .serialize(row)
            .map_err(|e| ScraperError::persistence(path, e))?;
    }
    writer.flush().map_err(|e| ScraperError::persistence(path, e))?;

    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Reads a CSV previously produced by `write_csv`.
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| ScraperError::persistence(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| ScraperError::persistence(path, e))?
        .clone();
    if headers.iter().ne(CSV_HEADERS) {
        return Err(ScraperError::persistence(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unexpected header row: {:?}", headers),
            ),
        ));
    }

    let rows = reader
        .deserialize::<ForecastRow>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ScraperError::persistence(path, e))?;
    Ok(Table::new(rows))
}
