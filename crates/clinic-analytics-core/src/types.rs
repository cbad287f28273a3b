use chrono::{DateTime, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::AnalyticsResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages expressed on a 0-100 scale (12.5 = 12.5%).
pub type Rate = Decimal;

/// Patient head counts.
pub type Count = u64;

/// Anything stamped with a calendar date that can be range-filtered.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// An inclusive calendar-day range. Both endpoints belong to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AnalyticsResult<Self> {
        let range = DateRange { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Build a range from two instants, keeping only their local calendar dates.
    pub fn from_datetimes<Tz: TimeZone>(
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> AnalyticsResult<Self> {
        Self::new(start.date_naive(), end.date_naive())
    }

    /// Fails when `start` falls after `end`. Ranges arriving from JSON are
    /// unchecked until this runs.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.start > self.end {
            return Err(AnalyticsError::invalid(
                "date_range",
                format!("start {} is after end {}", self.start, self.end),
            ));
        }
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Items whose calendar date falls inside the range, in input order.
    pub fn filter<'a, T: Dated>(&self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        let range = *self;
        items.iter().filter(move |item| range.contains(item.date()))
    }

    /// Inclusive day count: a single-day range has one day.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every calendar day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// `total` spread evenly over every day of the range, days without data
    /// included.
    pub(crate) fn per_day(&self, total: Decimal) -> Decimal {
        let days = self.num_days();
        if days <= 0 {
            Decimal::ZERO
        } else {
            total / Decimal::from(days)
        }
    }
}

/// Standard report envelope handed to presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub version: String,
    pub precision: String,
}

/// Wrap a computed report with its methodology and metadata. Carries no
/// timing information, so equal inputs serialize identically.
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    result: T,
) -> ReportOutput<T> {
    ReportOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ReportMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
