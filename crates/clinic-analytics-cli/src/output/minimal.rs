use serde_json::Value;

use super::{cell, report_of};

/// Headline fields, most specific first.
const PRIORITY_KEYS: [&str; 7] = [
    "formatted",
    "growthPct",
    "formattedTotalRevenue",
    "totalRevenue",
    "retentionRate",
    "totalNewPatients",
    "start",
];

/// Print just the headline value of a report.
///
/// For sequences, prints one `date: total` line per row.
pub fn print_minimal(value: &Value) {
    match report_of(value) {
        Value::Object(map) => {
            for key in PRIORITY_KEYS {
                if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                    println!("{}", cell(val));
                    return;
                }
            }
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, cell(val));
            }
        }
        Value::Array(rows) => {
            for row in rows {
                println!("{}: {}", cell(&row["date"]), cell(&row["total"]));
            }
        }
        other => println!("{}", cell(other)),
    }
}
