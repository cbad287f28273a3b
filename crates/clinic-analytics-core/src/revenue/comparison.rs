use serde::{Deserialize, Serialize};

use super::records::{checked_total, RevenueRecord};
use crate::growth::calculate_growth;
use crate::types::{DateRange, Money, Rate};
use crate::AnalyticsResult;

/// Revenue of one range measured against a baseline range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueComparison {
    pub current_range: DateRange,
    pub previous_range: DateRange,
    pub current_total: Money,
    pub previous_total: Money,
    /// Percentage change, 100 when the baseline is zero and current is not
    pub growth_pct: Rate,
}

/// Compare total revenue in `current` against `previous`.
pub fn compare_revenue(
    records: &[RevenueRecord],
    current: &DateRange,
    previous: &DateRange,
) -> AnalyticsResult<RevenueComparison> {
    current.validate()?;
    previous.validate()?;

    let current_total = checked_total(current.filter(records))?;
    let previous_total = checked_total(previous.filter(records))?;

    Ok(RevenueComparison {
        current_range: *current,
        previous_range: *previous,
        current_total,
        previous_total,
        growth_pct: calculate_growth(current_total, previous_total),
    })
}
