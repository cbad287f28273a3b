use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::types::{Dated, Money};
use crate::AnalyticsResult;

/// A single revenue entry as supplied by the record store.
///
/// `amount` may be negative for refunds and adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueRecord {
    pub date: NaiveDate,
    pub amount: Money,
    /// Payment origin, e.g. "direct", "insurance"
    pub source: String,
    /// Service line, e.g. "treatment", "checkup"
    pub category: String,
}

impl Dated for RevenueRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Sparse breakdown keyed by label. Only labels that were observed appear.
pub type Breakdown = BTreeMap<String, Money>;

/// `total + amount`, or `InvalidArgument` on `amount` when the sum leaves the
/// `Decimal` range.
pub(crate) fn add_amount(total: Money, amount: Money) -> AnalyticsResult<Money> {
    total.checked_add(amount).ok_or_else(|| {
        AnalyticsError::invalid(
            "amount",
            format!("adding {amount} to {total} overflows the decimal range"),
        )
    })
}

/// Sum amounts in iteration order with [`add_amount`].
pub(crate) fn checked_total<'a>(
    records: impl IntoIterator<Item = &'a RevenueRecord>,
) -> AnalyticsResult<Money> {
    records
        .into_iter()
        .try_fold(Money::ZERO, |total, record| add_amount(total, record.amount))
}

/// Add `amount` under `key`, creating the entry on first sight.
pub(crate) fn accumulate(
    breakdown: &mut Breakdown,
    key: &str,
    amount: Money,
) -> AnalyticsResult<()> {
    match breakdown.get_mut(key) {
        Some(total) => *total = add_amount(*total, amount)?,
        None => {
            breakdown.insert(key.to_string(), amount);
        }
    }
    Ok(())
}
