use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Count, DateRange, Dated, Rate};
use crate::AnalyticsResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Daily patient head counts, one expected per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSnapshot {
    pub date: NaiveDate,
    /// Patients registered on this date
    pub new_patients: u32,
    /// Patients considered active as of this date
    pub active_patients: u32,
    /// Patients considered inactive as of this date
    pub inactive_patients: u32,
}

impl Dated for PatientSnapshot {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl PatientSnapshot {
    /// active / (active + inactive) as a percentage; zero for an empty roster.
    pub fn retention_rate(&self) -> Rate {
        let roster = u64::from(self.active_patients) + u64::from(self.inactive_patients);
        if roster == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.active_patients) / Decimal::from(roster) * dec!(100)
    }
}

/// Patient acquisition and retention over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub total_new_patients: Count,
    /// total_new_patients / inclusive day count of the range
    pub avg_new_patients_per_day: Decimal,
    /// Retention of the latest in-range snapshot, in percent
    pub retention_rate: Rate,
    /// Date of the snapshot retention was read from
    pub latest_snapshot_date: Option<NaiveDate>,
    pub snapshot_count: usize,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Sum new patients over the range and read retention from its latest day.
///
/// Retention is a standing figure, not a flow: it comes from the single
/// most recent in-range snapshot. When several snapshots share that date the
/// last one in input order wins.
pub fn analyze_patient_trends(
    snapshots: &[PatientSnapshot],
    range: &DateRange,
) -> AnalyticsResult<TrendReport> {
    range.validate()?;

    let mut total_new_patients: Count = 0;
    let mut snapshot_count = 0usize;
    let mut latest: Option<&PatientSnapshot> = None;

    for snapshot in range.filter(snapshots) {
        total_new_patients += Count::from(snapshot.new_patients);
        snapshot_count += 1;
        let is_latest = match latest {
            Some(current) => snapshot.date >= current.date,
            None => true,
        };
        if is_latest {
            latest = Some(snapshot);
        }
    }

    let retention_rate = latest.map_or(Decimal::ZERO, PatientSnapshot::retention_rate);

    tracing::debug!(
        snapshot_count,
        total_new_patients,
        latest = ?latest.map(|s| s.date),
        "analyzed patient trends"
    );

    Ok(TrendReport {
        total_new_patients,
        avg_new_patients_per_day: range.per_day(Decimal::from(total_new_patients)),
        retention_rate,
        latest_snapshot_date: latest.map(|s| s.date),
        snapshot_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn snap(date: NaiveDate, new: u32, active: u32, inactive: u32) -> PatientSnapshot {
        PatientSnapshot {
            date,
            new_patients: new,
            active_patients: active,
            inactive_patients: inactive,
        }
    }

    fn two_days() -> DateRange {
        DateRange::new(d(3, 1), d(3, 2)).unwrap()
    }

    #[test]
    fn test_totals_average_and_retention() {
        let snapshots = vec![snap(d(3, 1), 5, 100, 20), snap(d(3, 2), 3, 102, 21)];
        let report = analyze_patient_trends(&snapshots, &two_days()).unwrap();

        assert_eq!(report.total_new_patients, 8);
        assert_eq!(report.avg_new_patients_per_day, dec!(4));
        // 102 / 123 * 100
        assert!(
            (report.retention_rate - dec!(82.93)).abs() < dec!(0.01),
            "got {}",
            report.retention_rate
        );
        assert_eq!(report.latest_snapshot_date, Some(d(3, 2)));
        assert_eq!(report.snapshot_count, 2);
    }

    #[test]
    fn test_retention_uses_latest_date_not_input_order() {
        let snapshots = vec![snap(d(3, 2), 3, 90, 10), snap(d(3, 1), 5, 50, 50)];
        let report = analyze_patient_trends(&snapshots, &two_days()).unwrap();
        assert_eq!(report.retention_rate, dec!(90));
    }

    #[test]
    fn test_retention_tie_break_is_last_in_input_order() {
        let snapshots = vec![snap(d(3, 2), 1, 50, 50), snap(d(3, 2), 1, 75, 25)];
        let report = analyze_patient_trends(&snapshots, &two_days()).unwrap();
        assert_eq!(report.retention_rate, dec!(75));
        assert_eq!(report.total_new_patients, 2);
    }

    #[test]
    fn test_snapshots_outside_range_ignored() {
        let snapshots = vec![
            snap(d(3, 1), 5, 100, 20),
            snap(d(3, 5), 40, 10, 90),
        ];
        let report = analyze_patient_trends(&snapshots, &two_days()).unwrap();
        assert_eq!(report.total_new_patients, 5);
        assert_eq!(report.latest_snapshot_date, Some(d(3, 1)));
    }

    #[test]
    fn test_average_uses_full_range_length() {
        let range = DateRange::new(d(3, 1), d(3, 4)).unwrap();
        let snapshots = vec![snap(d(3, 1), 6, 10, 0)];
        let report = analyze_patient_trends(&snapshots, &range).unwrap();
        assert_eq!(report.avg_new_patients_per_day, dec!(1.5));
    }

    #[test]
    fn test_empty_roster_has_zero_retention() {
        let snapshots = vec![snap(d(3, 1), 2, 0, 0)];
        let report = analyze_patient_trends(&snapshots, &two_days()).unwrap();
        assert_eq!(report.retention_rate, Decimal::ZERO);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let report = analyze_patient_trends(&[], &two_days()).unwrap();
        assert_eq!(
            report,
            TrendReport {
                total_new_patients: 0,
                avg_new_patients_per_day: Decimal::ZERO,
                retention_rate: Decimal::ZERO,
                latest_snapshot_date: None,
                snapshot_count: 0,
            }
        );
    }

    #[test]
    fn test_snapshot_json_is_camel_case() {
        let parsed: PatientSnapshot = serde_json::from_str(
            r#"{"date":"2024-03-01","newPatients":5,"activePatients":100,"inactivePatients":20}"#,
        )
        .unwrap();
        assert_eq!(parsed, snap(d(3, 1), 5, 100, 20));
    }
}
