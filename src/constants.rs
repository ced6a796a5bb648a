/// Fixed lookup values shared across the scraper.
/// Request defaults can be overridden through `Config`; the filtering rules cannot.

// HTTP request defaults
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; surf_scrap/1.0; +https://www.surf-report.com/)";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en;q=0.7";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// Output defaults
pub const DEFAULT_OUTPUT_FILE: &str = "data_surf.csv";
pub const DEFAULT_CONFIG_FILE: &str = "surf_scraper.toml";

/// Column names of the exported table, in order.
pub const CSV_HEADERS: [&str; 5] = ["Date", "Time", "Wave_size", "Wind_speed", "Wind_direction"];

/// Clock times ("HH:MM") at which forecast samples are retained.
pub const TARGET_TIMES: [&str; 6] = ["06:00", "09:00", "12:00", "15:00", "18:00", "21:00"];

/// Number of distinct calendar days kept in the output.
pub const MAX_DAYS: usize = 7;

/// Number of rows printed by the CLI preview.
pub const PREVIEW_ROWS: usize = 10;

// Field names inside a dumped forecast record
pub const FIELD_WAVE_HEIGHT: &str = "houle";
pub const FIELD_WAVE_HEIGHT_MAX: &str = "houleMax";
pub const FIELD_WIND_SPEED: &str = "ventMoyen";
pub const FIELD_WIND_DIRECTION: &str = "directionVent";

/// Returns true when `hh_mm` is one of the retained times-of-day.
pub fn is_target_time(hh_mm: &str) -> bool {
    TARGET_TIMES.contains(&hh_mm)
}
