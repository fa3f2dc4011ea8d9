use chrono::{DateTime, NaiveDate, Utc};

/// Format a UTC instant the way the console's export screens do.
///
/// Reports use a fixed `yyyy-MM-dd HH:mm:ss` layout rather than RFC 3339
/// so the values sort and filter cleanly in spreadsheet tools.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a calendar date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-readable month label for forecast rows, e.g. "Mar 2026".
pub fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.format("%b %Y").to_string(),
        None => format!("{year}-{month:02}"),
    }
}
