use chrono::NaiveDate;
use clinic_analytics_core::patients::{analyze_patient_trends, PatientSnapshot};
use clinic_analytics_core::revenue::{aggregate_revenue_data, calculate_kpis, RevenueRecord};
use clinic_analytics_core::DateRange;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end report scenarios over the public API
// ===========================================================================

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, day).unwrap()
}

fn clinic_revenue() -> Vec<RevenueRecord> {
    serde_json::from_str(
        r#"[
            {"date": "2024-03-01", "amount": 1000, "source": "direct", "category": "treatment"},
            {"date": "2024-03-01", "amount": "500", "source": "insurance", "category": "checkup"},
            {"date": "2024-03-02", "amount": 750.00, "source": "direct", "category": "treatment"}
        ]"#,
    )
    .unwrap()
}

fn clinic_snapshots() -> Vec<PatientSnapshot> {
    serde_json::from_str(
        r#"[
            {"date": "2024-03-01", "newPatients": 5, "activePatients": 100, "inactivePatients": 20},
            {"date": "2024-03-02", "newPatients": 3, "activePatients": 102, "inactivePatients": 21}
        ]"#,
    )
    .unwrap()
}

fn first_two_days() -> DateRange {
    DateRange::new(d(3, 1), d(3, 2)).unwrap()
}

#[test]
fn test_revenue_buckets_from_json_records() {
    let buckets = aggregate_revenue_data(&clinic_revenue(), &first_two_days()).unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].total, dec!(1500));
    assert_eq!(buckets[0].by_source["direct"], dec!(1000));
    assert_eq!(buckets[0].by_source["insurance"], dec!(500));
    assert_eq!(buckets[0].by_category["treatment"], dec!(1000));
    assert_eq!(buckets[0].by_category["checkup"], dec!(500));
    assert_eq!(buckets[1].total, dec!(750));
}

#[test]
fn test_kpis_from_json_records() {
    let kpis = calculate_kpis(&clinic_revenue(), &first_two_days()).unwrap();

    assert_eq!(kpis.total_revenue, dec!(2250));
    assert_eq!(kpis.avg_daily_revenue, dec!(1125));
    assert_eq!(kpis.revenue_by_source["direct"], dec!(1750));
    assert_eq!(kpis.revenue_by_source["insurance"], dec!(500));
}

#[test]
fn test_patient_trends_from_json_snapshots() {
    let report = analyze_patient_trends(&clinic_snapshots(), &first_two_days()).unwrap();

    assert_eq!(report.total_new_patients, 8);
    assert_eq!(report.avg_new_patients_per_day, dec!(4));
    assert_eq!(report.retention_rate.round_dp(2), dec!(82.93));
}

#[test]
fn test_empty_inputs_never_fail() {
    let range = DateRange::new(d(1, 1), d(12, 31)).unwrap();

    assert!(aggregate_revenue_data(&[], &range).unwrap().is_empty());

    let kpis = calculate_kpis(&[], &range).unwrap();
    assert_eq!(kpis.total_revenue, Decimal::ZERO);
    assert_eq!(kpis.avg_daily_revenue, Decimal::ZERO);
    assert!(kpis.revenue_by_source.is_empty());

    let trends = analyze_patient_trends(&[], &range).unwrap();
    assert_eq!(trends.total_new_patients, 0);
    assert_eq!(trends.avg_new_patients_per_day, Decimal::ZERO);
    assert_eq!(trends.retention_rate, Decimal::ZERO);
}

#[test]
fn test_reports_are_idempotent() {
    let records = clinic_revenue();
    let snapshots = clinic_snapshots();
    let range = first_two_days();

    let first = (
        serde_json::to_string(&aggregate_revenue_data(&records, &range).unwrap()).unwrap(),
        serde_json::to_string(&calculate_kpis(&records, &range).unwrap()).unwrap(),
        serde_json::to_string(&analyze_patient_trends(&snapshots, &range).unwrap()).unwrap(),
    );
    let second = (
        serde_json::to_string(&aggregate_revenue_data(&records, &range).unwrap()).unwrap(),
        serde_json::to_string(&calculate_kpis(&records, &range).unwrap()).unwrap(),
        serde_json::to_string(&analyze_patient_trends(&snapshots, &range).unwrap()).unwrap(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_inputs_are_left_untouched() {
    let records = clinic_revenue();
    let before = records.clone();
    let _ = calculate_kpis(&records, &first_two_days()).unwrap();
    let _ = aggregate_revenue_data(&records, &first_two_days()).unwrap();
    assert_eq!(records, before);
}

#[test]
fn test_inverted_range_fails_fast_everywhere() {
    let inverted: DateRange =
        serde_json::from_str(r#"{"start": "2024-03-02", "end": "2024-03-01"}"#).unwrap();

    assert!(aggregate_revenue_data(&clinic_revenue(), &inverted).is_err());
    assert!(calculate_kpis(&clinic_revenue(), &inverted).is_err());
    assert!(analyze_patient_trends(&clinic_snapshots(), &inverted).is_err());
}

// ===========================================================================
// Decimal precision and range limits
// ===========================================================================

#[test]
fn test_amounts_serialize_as_exact_json_numbers() {
    let kpis = calculate_kpis(&clinic_revenue(), &first_two_days()).unwrap();
    let json = serde_json::to_value(&kpis).unwrap();

    assert!(json["totalRevenue"].is_number(), "got {}", json["totalRevenue"]);
    assert!(json["revenueBySource"]["direct"].is_number());
}

#[test]
fn test_high_precision_amount_round_trips_exactly() {
    let records: Vec<RevenueRecord> = serde_json::from_str(
        r#"[{"date": "2024-03-01", "amount": 12345678901234567890.12, "source": "direct", "category": "treatment"}]"#,
    )
    .unwrap();
    assert_eq!(records[0].amount, dec!(12345678901234567890.12));

    let kpis = calculate_kpis(&records, &first_two_days()).unwrap();
    let text = serde_json::to_string(&kpis).unwrap();
    assert!(
        text.contains(r#""totalRevenue":12345678901234567890.12"#),
        "got {}",
        text
    );

    let back: clinic_analytics_core::revenue::KpiReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back.total_revenue, dec!(12345678901234567890.12));
}

#[test]
fn test_overflowing_totals_are_reported_not_panicked() {
    let records = vec![
        RevenueRecord {
            date: d(3, 1),
            amount: Decimal::MAX,
            source: "direct".to_string(),
            category: "treatment".to_string(),
        },
        RevenueRecord {
            date: d(3, 1),
            amount: Decimal::MAX,
            source: "direct".to_string(),
            category: "treatment".to_string(),
        },
    ];

    let err = calculate_kpis(&records, &first_two_days()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid argument: amount:"), "got {}", err);
    assert!(aggregate_revenue_data(&records, &first_two_days()).is_err());
}
