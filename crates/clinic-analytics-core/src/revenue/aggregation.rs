use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::records::{accumulate, add_amount, Breakdown, RevenueRecord};
use crate::types::{DateRange, Money};
use crate::AnalyticsResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One calendar day of revenue with its source and category breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBucket {
    pub date: NaiveDate,
    /// Sum of every in-range amount on this date
    pub total: Money,
    pub by_source: Breakdown,
    pub by_category: Breakdown,
}

impl RevenueBucket {
    fn empty(date: NaiveDate) -> Self {
        RevenueBucket {
            date,
            total: Decimal::ZERO,
            by_source: Breakdown::new(),
            by_category: Breakdown::new(),
        }
    }

    fn add(&mut self, record: &RevenueRecord) -> AnalyticsResult<()> {
        self.total = add_amount(self.total, record.amount)?;
        accumulate(&mut self.by_source, &record.source, record.amount)?;
        accumulate(&mut self.by_category, &record.category, record.amount)
    }
}

/// A day's total in a dense series. Days without records carry zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub total: Money,
}

// ---------------------------------------------------------------------------
// Function 1: aggregate_revenue_data
// ---------------------------------------------------------------------------

/// Group in-range revenue records by calendar date.
///
/// Produces one bucket per date that has at least one record, ascending by
/// date. Amounts are summed in input order.
pub fn aggregate_revenue_data(
    records: &[RevenueRecord],
    range: &DateRange,
) -> AnalyticsResult<Vec<RevenueBucket>> {
    range.validate()?;

    let mut buckets: BTreeMap<NaiveDate, RevenueBucket> = BTreeMap::new();
    for record in range.filter(records) {
        buckets
            .entry(record.date)
            .or_insert_with(|| RevenueBucket::empty(record.date))
            .add(record)?;
    }

    tracing::debug!(
        records = records.len(),
        buckets = buckets.len(),
        start = %range.start,
        end = %range.end,
        "aggregated revenue"
    );

    Ok(buckets.into_values().collect())
}

// ---------------------------------------------------------------------------
// Function 2: daily_revenue_series
// ---------------------------------------------------------------------------

/// Revenue total for every day of `range`, zero-filled, for charting.
pub fn daily_revenue_series(
    records: &[RevenueRecord],
    range: &DateRange,
) -> AnalyticsResult<Vec<DailyRevenue>> {
    range.validate()?;

    let mut totals: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in range.filter(records) {
        let total = totals.entry(record.date).or_insert(Decimal::ZERO);
        *total = add_amount(*total, record.amount)?;
    }

    Ok(range
        .days()
        .map(|date| DailyRevenue {
            date,
            total: totals.get(&date).copied().unwrap_or(Decimal::ZERO),
        })
        .collect())
}
