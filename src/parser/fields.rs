//! Permissive decoding of scalar fields from a dumped record body.
//!
//! Missing or malformed values decode to `None`; nothing here returns an error.

use crate::constants::{
    FIELD_WAVE_HEIGHT, FIELD_WAVE_HEIGHT_MAX, FIELD_WIND_DIRECTION, FIELD_WIND_SPEED,
};
use crate::types::DecodedFields;
use regex::Regex;

/// Finds `["field"] => string(N) "VALUE"` in `body` and returns `VALUE`.
pub fn extract_string<'a>(body: &'a str, field: &str) -> Option<&'a str> {
    let pattern = format!(
        r#"\["{}"\]\s*=>\s*string\([0-9]+\)\s*"([^"]*)""#,
        regex::escape(field)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn clean(raw: &str) -> Option<&str> {
    match raw.trim() {
        "" | "-" => None,
        s => Some(s),
    }
}

pub fn to_float(raw: Option<&str>) -> Option<f64> {
    clean(raw?)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses an integer, accepting values with a fractional part ("12.0" → 12, truncated toward zero).
pub fn to_int(raw: Option<&str>) -> Option<i64> {
    let s = clean(raw?)?;
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?.trunc();
    if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Decodes the four forecast fields used to build a row.
pub fn decode(body: &str) -> DecodedFields {
    DecodedFields {
        primary_wave_height: to_float(extract_string(body, FIELD_WAVE_HEIGHT)),
        max_wave_height: to_float(extract_string(body, FIELD_WAVE_HEIGHT_MAX)),
        mean_wind_speed: to_int(extract_string(body, FIELD_WIND_SPEED)),
        wind_direction_degrees: to_int(extract_string(body, FIELD_WIND_DIRECTION)),
    }
}
