use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use clinic_analytics_core::formatting::CurrencyFormat;
use clinic_analytics_core::with_metadata;

/// Arguments for currency formatting
#[derive(Args)]
pub struct FormatArgs {
    /// Amount to format, e.g. 1234567.89 or -250
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Decimal,

    /// Currency code printed after the number
    #[arg(long, default_value = "MAD")]
    pub symbol: String,
}

pub fn run_format(args: FormatArgs) -> anyhow::Result<Value> {
    let format = CurrencyFormat {
        symbol: args.symbol,
        ..CurrencyFormat::default()
    };
    let formatted = format.format(args.amount);

    let output = with_metadata(
        "Grouped currency display, rounded half away from zero",
        &serde_json::json!({ "amount": args.amount, "format": format }),
        Vec::new(),
        serde_json::json!({ "formatted": formatted }),
    );
    Ok(serde_json::to_value(output)?)
}
