//! Display formatting for student fields.
//!
//! Scores are always shown with one decimal place so whole numbers read as
//! marks (`91.0`, not `91`). Timestamps use `YYYY-MM-DD HH:MM`; a missing
//! timestamp renders as an empty string.

use chrono::NaiveDateTime;

pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

pub fn format_timestamp(timestamp: &Option<NaiveDateTime>) -> String {
    timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
