use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::core::{AppError, Result};
use crate::modules::reports::models::{RangePreset, TimeRange};

/// Turns a named preset or explicit calendar dates into a concrete
/// instant interval
pub struct RangeResolver;

impl RangeResolver {
    /// Resolve the reporting window, evaluated at `now`.
    ///
    /// Explicit dates take precedence over the preset when both are
    /// present: the range spans the start date's first instant to the end
    /// date's last instant, so a March 1–31 request covers all of March.
    /// An inverted explicit range is rejected rather than silently
    /// returning an empty report.
    ///
    /// # Errors
    /// Returns a validation error if `start_date > end_date`
    pub fn resolve(
        preset: RangePreset,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<TimeRange> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(AppError::validation(format!(
                    "startDate ({}) must be before or equal to endDate ({})",
                    start, end
                )));
            }
            return Ok(TimeRange::new(start_of_day(start), end_of_day(end)));
        }

        let range = match preset {
            RangePreset::SevenDays => TimeRange::new(now - Duration::days(7), now),
            RangePreset::ThirtyDays => TimeRange::new(now - Duration::days(30), now),
            RangePreset::NinetyDays => TimeRange::new(now - Duration::days(90), now),
            RangePreset::YearToDate => {
                let jan_first = NaiveDate::from_ymd_opt(now.year(), 1, 1)
                    .expect("January 1st exists in every year");
                TimeRange::new(start_of_day(jan_first), now)
            }
            RangePreset::CurrentMonth => month_bounds(now.year(), now.month()),
        };

        Ok(range)
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).expect("valid wall-clock time");
    date.and_time(last_second).and_utc()
}

/// First instant through last instant of the given calendar month.
fn month_bounds(year: i32, month: u32) -> TimeRange {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month start exists");
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("month start exists");

    TimeRange::new(
        start_of_day(first),
        start_of_day(next_first) - Duration::seconds(1),
    )
}
