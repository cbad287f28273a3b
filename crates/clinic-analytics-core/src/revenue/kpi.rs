use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::records::{accumulate, add_amount, Breakdown, RevenueRecord};
use crate::types::{DateRange, Money};
use crate::AnalyticsResult;

/// Headline revenue metrics for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiReport {
    pub total_revenue: Money,
    /// total_revenue / inclusive day count of the range
    pub avg_daily_revenue: Money,
    pub revenue_by_source: Breakdown,
    pub revenue_by_category: Breakdown,
    /// In-range records that contributed
    pub record_count: usize,
    /// Distinct in-range dates with at least one record
    pub active_days: usize,
}

/// Summarise in-range revenue.
///
/// The daily average divides by every day of the range, so quiet days pull
/// it down rather than being skipped.
pub fn calculate_kpis(records: &[RevenueRecord], range: &DateRange) -> AnalyticsResult<KpiReport> {
    range.validate()?;

    let mut total_revenue = Decimal::ZERO;
    let mut revenue_by_source = Breakdown::new();
    let mut revenue_by_category = Breakdown::new();
    let mut dates = BTreeSet::new();
    let mut record_count = 0usize;

    for record in range.filter(records) {
        total_revenue = add_amount(total_revenue, record.amount)?;
        accumulate(&mut revenue_by_source, &record.source, record.amount)?;
        accumulate(&mut revenue_by_category, &record.category, record.amount)?;
        dates.insert(record.date);
        record_count += 1;
    }

    tracing::debug!(
        record_count,
        days = range.num_days(),
        %total_revenue,
        "calculated revenue kpis"
    );

    Ok(KpiReport {
        total_revenue,
        avg_daily_revenue: range.per_day(total_revenue),
        revenue_by_source,
        revenue_by_category,
        record_count,
        active_days: dates.len(),
    })
}
