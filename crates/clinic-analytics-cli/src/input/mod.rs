pub mod file;
pub mod stdin;

use anyhow::bail;
use serde::Deserialize;

use clinic_analytics_core::patients::PatientSnapshot;
use clinic_analytics_core::revenue::RevenueRecord;

/// Records handed over by the clinic's record store export.
///
/// Either collection may be omitted; commands read the one they need.
#[derive(Debug, Default, Deserialize)]
pub struct ClinicData {
    #[serde(default)]
    pub revenue: Vec<RevenueRecord>,
    #[serde(default)]
    pub patients: Vec<PatientSnapshot>,
}

/// Load records from `--input` when given, otherwise from piped stdin.
pub fn load_clinic_data(path: Option<&str>) -> anyhow::Result<ClinicData> {
    if let Some(path) = path {
        return file::read_data(path);
    }
    if let Some(data) = stdin::read_stdin()? {
        return Ok(data);
    }
    bail!("--input <file.json|file.yaml> or JSON on stdin required")
}
