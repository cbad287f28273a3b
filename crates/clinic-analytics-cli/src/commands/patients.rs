use clap::Args;
use serde_json::Value;

use clinic_analytics_core::patients::analyze_patient_trends;
use clinic_analytics_core::with_metadata;

use super::RangeArgs;
use crate::input;

/// Arguments for patient trend analysis
#[derive(Args)]
pub struct TrendArgs {
    /// Path to JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub range: RangeArgs,
}

pub fn run_trends(args: TrendArgs) -> anyhow::Result<Value> {
    let range = args.range.resolve()?;
    let data = input::load_clinic_data(args.input.as_deref())?;
    let report = analyze_patient_trends(&data.patients, &range)?;

    let mut warnings = Vec::new();
    match report.latest_snapshot_date {
        None => warnings.push(format!(
            "No patient snapshots between {} and {}",
            range.start, range.end
        )),
        Some(latest) => {
            let same_day = data.patients.iter().filter(|s| s.date == latest).count();
            if same_day > 1 {
                warnings.push(format!(
                    "{same_day} snapshots dated {latest}; retention taken from the last one supplied"
                ));
            }
        }
    }

    let output = with_metadata(
        "New-patient totals over the range; retention from the latest snapshot",
        &serde_json::json!({ "range": range, "days": range.num_days() }),
        warnings,
        report,
    );
    Ok(serde_json::to_value(output)?)
}
