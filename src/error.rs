use thiserror::Error;

/// Errors raised for malformed engine input
///
/// Scoring itself never fails: a pair that does not match scores zero.
/// These variants only cover input that cannot be scored at all.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    #[error("Unknown supply chain role: {0}")]
    UnknownRole(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchError::Validation(errors.to_string())
    }
}

impl MatchError {
    /// Short machine-readable code for error bodies
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::Validation(_) => "validation_failed",
            MatchError::UnknownRequestType(_) => "unknown_request_type",
            MatchError::UnknownRole(_) => "unknown_role",
            MatchError::InvalidPayload(_) => "invalid_payload",
        }
    }
}
