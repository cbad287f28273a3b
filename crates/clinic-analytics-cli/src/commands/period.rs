use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use clinic_analytics_core::period::{previous_date_range, Period};
use clinic_analytics_core::{with_metadata, DateRange};

use super::today;

/// Arguments for period resolution
#[derive(Args)]
pub struct PeriodArgs {
    /// Named period: week, month, quarter or year
    #[arg(long)]
    pub period: String,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub reference: Option<NaiveDate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedRange {
    period: Period,
    start: NaiveDate,
    end: NaiveDate,
    num_days: i64,
    previous: DateRange,
}

pub fn run_range(args: PeriodArgs) -> anyhow::Result<Value> {
    let period: Period = args.period.parse()?;
    let reference = args.reference.unwrap_or_else(today);
    let range = period
        .date_range(reference)
        .with_context(|| format!("resolving {period} around {reference}"))?;
    let previous = previous_date_range(period, &range)?;

    let resolved = ResolvedRange {
        period,
        start: range.start,
        end: range.end,
        num_days: range.num_days(),
        previous,
    };

    let output = with_metadata(
        "Calendar period resolution (ISO weeks start Monday)",
        &serde_json::json!({ "period": period, "reference": reference }),
        Vec::new(),
        resolved,
    );
    Ok(serde_json::to_value(output)?)
}
