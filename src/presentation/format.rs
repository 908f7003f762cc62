use chrono::{DateTime, Locale, Utc};
use chrono_tz::Europe::Vienna;

/// Long Austrian German date format, e.g. `Dienstag, 15. Juni 2021 14:30`.
const LONG_DATETIME_FORMAT: &str = "%A, %-d. %B %Y %H:%M";

/// Formats an observation time in Vienna local time.
pub fn format_observed_at(observed_at: DateTime<Utc>) -> String {
    observed_at
        .with_timezone(&Vienna)
        .format_localized(LONG_DATETIME_FORMAT, Locale::de_AT)
        .to_string()
}

/// `21.4 °C` style value, `-` when missing.
pub(crate) fn with_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", v, unit),
        None => "-".to_string(),
    }
}
