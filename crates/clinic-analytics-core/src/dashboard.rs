use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::formatting::format_currency;
use crate::growth::calculate_growth;
use crate::patients::{analyze_patient_trends, PatientSnapshot, TrendReport};
use crate::period::Period;
use crate::revenue::{
    aggregate_revenue_data, calculate_kpis, compare_revenue, KpiReport, RevenueBucket,
    RevenueComparison, RevenueRecord,
};
use crate::types::{DateRange, Rate};
use crate::AnalyticsResult;

/// Everything a period dashboard shows, computed against one reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub period: Period,
    pub range: DateRange,
    pub previous_range: DateRange,
    pub revenue: Vec<RevenueBucket>,
    pub kpis: KpiReport,
    pub patients: TrendReport,
    pub revenue_growth: RevenueComparison,
    /// New patients in `range` against `previous_range`, in percent
    pub new_patient_growth_pct: Rate,
    pub formatted_total_revenue: String,
    pub formatted_avg_daily_revenue: String,
}

/// Resolve `period` around `reference` and assemble its dashboard, with
/// growth measured against the preceding period of the same kind.
pub fn build_dashboard(
    revenue: &[RevenueRecord],
    snapshots: &[PatientSnapshot],
    period: Period,
    reference: NaiveDate,
) -> AnalyticsResult<DashboardReport> {
    let range = period.date_range(reference)?;
    let previous_range = period.preceding(&range)?;

    let buckets = aggregate_revenue_data(revenue, &range)?;
    let kpis = calculate_kpis(revenue, &range)?;
    let patients = analyze_patient_trends(snapshots, &range)?;
    let previous_patients = analyze_patient_trends(snapshots, &previous_range)?;
    let revenue_growth = compare_revenue(revenue, &range, &previous_range)?;

    let new_patient_growth_pct = calculate_growth(
        patients.total_new_patients.into(),
        previous_patients.total_new_patients.into(),
    );

    tracing::debug!(%period, %reference, buckets = buckets.len(), "built dashboard");

    Ok(DashboardReport {
        period,
        range,
        previous_range,
        formatted_total_revenue: format_currency(kpis.total_revenue),
        formatted_avg_daily_revenue: format_currency(kpis.avg_daily_revenue),
        revenue: buckets,
        kpis,
        patients,
        revenue_growth,
        new_patient_growth_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn rec(date: NaiveDate, amount: Decimal, source: &str) -> RevenueRecord {
        RevenueRecord {
            date,
            amount,
            source: source.to_string(),
            category: "treatment".to_string(),
        }
    }

    fn snap(date: NaiveDate, new: u32, active: u32, inactive: u32) -> PatientSnapshot {
        PatientSnapshot {
            date,
            new_patients: new,
            active_patients: active,
            inactive_patients: inactive,
        }
    }

    #[test]
    fn test_monthly_dashboard() {
        let revenue = vec![
            rec(d(2, 14), dec!(2000), "direct"),
            rec(d(3, 1), dec!(1500), "direct"),
            rec(d(3, 15), dec!(1600), "insurance"),
        ];
        let snapshots = vec![
            snap(d(2, 20), 10, 80, 20),
            snap(d(3, 1), 4, 90, 10),
            snap(d(3, 31), 8, 95, 5),
        ];

        let report = build_dashboard(&revenue, &snapshots, Period::Month, d(3, 10)).unwrap();

        assert_eq!(report.range, DateRange::new(d(3, 1), d(3, 31)).unwrap());
        assert_eq!(report.previous_range, DateRange::new(d(2, 1), d(2, 29)).unwrap());
        assert_eq!(report.revenue.len(), 2);
        assert_eq!(report.kpis.total_revenue, dec!(3100));
        assert_eq!(report.kpis.avg_daily_revenue, dec!(100));
        assert_eq!(report.revenue_growth.previous_total, dec!(2000));
        assert_eq!(report.revenue_growth.growth_pct, dec!(55));
        assert_eq!(report.patients.total_new_patients, 12);
        assert_eq!(report.patients.retention_rate, dec!(95));
        assert_eq!(report.new_patient_growth_pct, dec!(20));
        assert_eq!(report.formatted_total_revenue, "3.100,00 MAD");
        assert_eq!(report.formatted_avg_daily_revenue, "100,00 MAD");
    }

    #[test]
    fn test_dashboard_without_data() {
        let report = build_dashboard(&[], &[], Period::Week, d(3, 14)).unwrap();
        assert!(report.revenue.is_empty());
        assert_eq!(report.kpis.total_revenue, Decimal::ZERO);
        assert_eq!(report.revenue_growth.growth_pct, Decimal::ZERO);
        assert_eq!(report.formatted_total_revenue, "0,00 MAD");
    }
}
