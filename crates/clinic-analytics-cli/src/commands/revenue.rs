use clap::Args;
use serde_json::Value;

use clinic_analytics_core::revenue::{aggregate_revenue_data, calculate_kpis, daily_revenue_series};
use clinic_analytics_core::with_metadata;

use super::RangeArgs;
use crate::input;

/// Arguments for per-day revenue aggregation
#[derive(Args)]
pub struct RevenueArgs {
    /// Path to JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Emit one zero-filled total per calendar day instead of sparse buckets
    #[arg(long)]
    pub daily: bool,
}

/// Arguments for revenue KPIs
#[derive(Args)]
pub struct KpiArgs {
    /// Path to JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub range: RangeArgs,
}

pub fn run_revenue(args: RevenueArgs) -> anyhow::Result<Value> {
    let range = args.range.resolve()?;
    let data = input::load_clinic_data(args.input.as_deref())?;
    let in_range = range.filter(&data.revenue).count();

    let mut warnings = Vec::new();
    if in_range == 0 {
        warnings.push(format!(
            "No revenue records between {} and {}",
            range.start, range.end
        ));
    }

    let assumptions = serde_json::json!({
        "range": range,
        "records_supplied": data.revenue.len(),
        "records_in_range": in_range,
    });

    let value = if args.daily {
        let series = daily_revenue_series(&data.revenue, &range)?;
        serde_json::to_value(with_metadata(
            "Daily revenue totals, zero-filled across the range",
            &assumptions,
            warnings,
            series,
        ))?
    } else {
        let buckets = aggregate_revenue_data(&data.revenue, &range)?;
        serde_json::to_value(with_metadata(
            "Revenue grouped by calendar date with source and category breakdowns",
            &assumptions,
            warnings,
            buckets,
        ))?
    };
    Ok(value)
}

pub fn run_kpis(args: KpiArgs) -> anyhow::Result<Value> {
    let range = args.range.resolve()?;
    let data = input::load_clinic_data(args.input.as_deref())?;
    let kpis = calculate_kpis(&data.revenue, &range)?;

    let mut warnings = Vec::new();
    if kpis.record_count == 0 {
        warnings.push(format!(
            "No revenue records between {} and {}; KPIs are zero",
            range.start, range.end
        ));
    }
    if kpis.total_revenue.is_sign_negative() && !kpis.total_revenue.is_zero() {
        warnings.push("Refunds exceed revenue for this range".to_string());
    }

    let output = with_metadata(
        "Range revenue KPIs; daily average divides by every calendar day of the range",
        &serde_json::json!({ "range": range, "days": range.num_days() }),
        warnings,
        kpis,
    );
    Ok(serde_json::to_value(output)?)
}
