pub mod dashboard;
pub mod formatting;
pub mod growth;
pub mod patients;
pub mod period;
pub mod revenue;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::Args;

use clinic_analytics_core::period::calculate_date_range;
use clinic_analytics_core::DateRange;

/// Range selection shared by the record-driven commands.
///
/// Either an explicit `--start`/`--end` pair or a named `--period` resolved
/// around `--reference` (today when omitted).
#[derive(Args)]
pub struct RangeArgs {
    /// Named period: week, month, quarter or year
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub period: Option<String>,

    /// Reference date for --period (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "period")]
    pub reference: Option<NaiveDate>,

    /// First day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "end")]
    pub start: Option<NaiveDate>,

    /// Last day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "start")]
    pub end: Option<NaiveDate>,
}

impl RangeArgs {
    pub fn resolve(&self) -> anyhow::Result<DateRange> {
        match (&self.period, self.start, self.end) {
            (Some(period), _, _) => {
                let reference = self.reference.unwrap_or_else(today);
                calculate_date_range(period, reference)
                    .with_context(|| format!("resolving {period} around {reference}"))
            }
            (None, Some(start), Some(end)) => {
                DateRange::new(start, end).context("building explicit date range")
            }
            _ => bail!("either --period or both --start and --end are required"),
        }
    }
}

/// The caller's current calendar date. The core never reads the clock itself.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
