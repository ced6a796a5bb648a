//! French display labels for dates and compass bearings.

use chrono::{Datelike, NaiveDateTime};

/// Immutable label tables used to render forecast rows.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    /// Indexed by weekday, Monday first.
    pub weekdays: [&'static str; 7],
    /// Indexed by month, January first.
    pub months: [&'static str; 12],
    /// 16-point compass, clockwise from north.
    pub compass: [&'static str; 16],
}

pub const FRENCH: Labels = Labels {
    weekdays: ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"],
    months: [
        "Janvier", "Février", "Mars", "Avril", "Mai", "Juin",
        "Juillet", "Août", "Septembre", "Octobre", "Novembre", "Décembre",
    ],
    compass: [
        "Nord", "Nord Nord Est", "Nord Est", "Est Nord Est",
        "Est", "Est Sud Est", "Sud Est", "Sud Sud Est",
        "Sud", "Sud Sud Ouest", "Sud Ouest", "Ouest Sud Ouest",
        "Ouest", "Ouest Nord Ouest", "Nord Ouest", "Nord Nord Ouest",
    ],
};

const BUCKET_WIDTH: f64 = 22.5;

impl Default for Labels {
    fn default() -> Self {
        FRENCH
    }
}

impl Labels {
    /// Maps a bearing in degrees to one of 16 compass labels.
    ///
    /// Buckets are 22.5° wide and centred on each compass point, so "Nord"
    /// covers [348.75°, 11.25°). Any integer is accepted and wrapped into [0, 360).
    pub fn degrees_to_label(&self, deg: i64) -> &'static str {
        let deg = deg.rem_euclid(360) as f64;
        let idx = ((deg + BUCKET_WIDTH / 2.0) / BUCKET_WIDTH).floor() as usize % 16;
        self.compass[idx]
    }

    /// Renders "<Weekday> <day> <Month>", e.g. "Samedi 22 Octobre".
    pub fn format_date_label(&self, timestamp: &NaiveDateTime) -> String {
        format!(
            "{} {} {}",
            self.weekdays[timestamp.weekday().num_days_from_monday() as usize],
            timestamp.day(),
            self.months[timestamp.month0() as usize]
        )
    }
}

pub fn degrees_to_label(deg: i64) -> &'static str {
    FRENCH.degrees_to_label(deg)
}

pub fn format_date_label(timestamp: &NaiveDateTime) -> String {
    FRENCH.format_date_label(timestamp)
}
