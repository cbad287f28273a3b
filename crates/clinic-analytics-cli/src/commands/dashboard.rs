use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use clinic_analytics_core::dashboard::build_dashboard;
use clinic_analytics_core::period::Period;
use clinic_analytics_core::with_metadata;

use super::today;
use crate::input;

/// Arguments for the period dashboard
#[derive(Args)]
pub struct DashboardArgs {
    /// Path to JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,

    /// Named period: week, month, quarter or year
    #[arg(long, default_value = "month")]
    pub period: String,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub reference: Option<NaiveDate>,
}

pub fn run_dashboard(args: DashboardArgs) -> anyhow::Result<Value> {
    let period: Period = args.period.parse()?;
    let reference = args.reference.unwrap_or_else(today);
    let data = input::load_clinic_data(args.input.as_deref())?;

    let report = build_dashboard(&data.revenue, &data.patients, period, reference)?;

    let mut warnings = Vec::new();
    if report.kpis.record_count == 0 {
        warnings.push(format!("No revenue records in the current {period}"));
    }
    if report.patients.snapshot_count == 0 {
        warnings.push(format!("No patient snapshots in the current {period}"));
    }
    if report.revenue_growth.previous_total.is_zero() && !report.revenue_growth.current_total.is_zero() {
        warnings.push(format!("No revenue in the previous {period}; growth reported as 100%"));
    }

    let output = with_metadata(
        "Period dashboard: revenue buckets, KPIs, patient trends and growth against the previous period",
        &serde_json::json!({
            "period": period,
            "reference": reference,
            "revenue_records": data.revenue.len(),
            "patient_snapshots": data.patients.len(),
        }),
        warnings,
        report,
    );
    Ok(serde_json::to_value(output)?)
}
