pub mod error;
pub mod formatting;
pub mod growth;
pub mod period;
pub mod types;

#[cfg(feature = "revenue")]
pub mod revenue;

#[cfg(feature = "patients")]
pub mod patients;

#[cfg(feature = "dashboard")]
pub mod dashboard;

pub use error::AnalyticsError;
pub use types::*;

/// Standard result type for all clinic analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
