use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use clinic_analytics_core::growth::calculate_growth;
use clinic_analytics_core::with_metadata;

/// Arguments for growth calculation
#[derive(Args)]
pub struct GrowthArgs {
    /// Current-period value
    #[arg(long, allow_hyphen_values = true)]
    pub current: Decimal,

    /// Previous-period value
    #[arg(long, allow_hyphen_values = true)]
    pub previous: Decimal,
}

pub fn run_growth(args: GrowthArgs) -> anyhow::Result<Value> {
    let growth_pct = calculate_growth(args.current, args.previous);

    let mut warnings = Vec::new();
    if args.previous.is_zero() && !args.current.is_zero() {
        warnings.push("Previous value is zero; growth reported as 100%".to_string());
    }

    let output = with_metadata(
        "Percentage change relative to the previous value",
        &serde_json::json!({ "current": args.current, "previous": args.previous }),
        warnings,
        serde_json::json!({ "growthPct": growth_pct }),
    );
    Ok(serde_json::to_value(output)?)
}
