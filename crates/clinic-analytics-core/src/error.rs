use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("Invalid argument: {field}: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl AnalyticsError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        AnalyticsError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
