use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::types::DateRange;
use crate::AnalyticsResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Named reporting period. Weeks start on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Quarter,
    Year,
}

impl FromStr for Period {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "quarter" => Ok(Period::Quarter),
            "year" => Ok(Period::Year),
            other => Err(AnalyticsError::invalid(
                "period",
                format!("unrecognized period '{other}', expected week, month, quarter or year"),
            )),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        };
        f.write_str(label)
    }
}

impl Period {
    /// The concrete range of this period that contains `reference`.
    pub fn date_range(self, reference: NaiveDate) -> AnalyticsResult<DateRange> {
        let (start, end) = match self {
            Period::Week => {
                let offset = u64::from(reference.weekday().num_days_from_monday());
                let start = reference
                    .checked_sub_days(Days::new(offset))
                    .ok_or_else(|| out_of_calendar(reference))?;
                let end = start
                    .checked_add_days(Days::new(6))
                    .ok_or_else(|| out_of_calendar(reference))?;
                (start, end)
            }
            Period::Month => month_bounds(reference.year(), reference.month(), reference.month())
                .ok_or_else(|| out_of_calendar(reference))?,
            Period::Quarter => {
                let first_month = (reference.month0() / 3) * 3 + 1;
                month_bounds(reference.year(), first_month, first_month + 2)
                    .ok_or_else(|| out_of_calendar(reference))?
            }
            Period::Year => month_bounds(reference.year(), 1, 12)
                .ok_or_else(|| out_of_calendar(reference))?,
        };
        DateRange::new(start, end)
    }

    /// The period of the same kind immediately before `range`.
    pub fn preceding(self, range: &DateRange) -> AnalyticsResult<DateRange> {
        range.validate()?;
        let day_before = range
            .start
            .pred_opt()
            .ok_or_else(|| out_of_calendar(range.start))?;
        self.date_range(day_before)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First day of `first_month` through the last day of `last_month`, same year.
fn month_bounds(year: i32, first_month: u32, last_month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, first_month, 1)?;
    let end = if last_month == 12 {
        NaiveDate::from_ymd_opt(year, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(year, last_month + 1, 1)?.pred_opt()?
    };
    Some((start, end))
}

fn out_of_calendar(date: NaiveDate) -> AnalyticsError {
    AnalyticsError::invalid(
        "reference",
        format!("{date} is too close to the edge of the supported calendar"),
    )
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Resolve a period literal (`week`, `month`, `quarter`, `year`) against an
/// explicit reference date.
pub fn calculate_date_range(period: &str, reference: NaiveDate) -> AnalyticsResult<DateRange> {
    let period: Period = period.parse()?;
    let range = period.date_range(reference)?;
    tracing::debug!(%period, %reference, start = %range.start, end = %range.end, "resolved period range");
    Ok(range)
}

/// Same as [`calculate_date_range`], resolving on the local calendar date of
/// `reference` in its own timezone.
pub fn calculate_date_range_at<Tz: TimeZone>(
    period: &str,
    reference: &DateTime<Tz>,
) -> AnalyticsResult<DateRange> {
    calculate_date_range(period, reference.date_naive())
}

/// The range covering the period just before `range`, e.g. February for a
/// March month range. Used as the baseline of growth comparisons.
pub fn previous_date_range(period: Period, range: &DateRange) -> AnalyticsResult<DateRange> {
    period.preceding(range)
}
