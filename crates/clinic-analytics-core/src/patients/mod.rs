pub mod trends;

pub use trends::{analyze_patient_trends, PatientSnapshot, TrendReport};
