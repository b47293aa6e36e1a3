use validator::Validate;

use crate::error::MatchError;
use crate::models::{CandidateProfile, Request, RequestFilters};

/// Reject requests that are missing identifiers or carry a negative budget
pub fn validate_request(request: &Request) -> Result<(), MatchError> {
    request.validate()?;
    Ok(())
}

/// Reject profiles without a user identifier
pub fn validate_profile(profile: &CandidateProfile) -> Result<(), MatchError> {
    profile.validate()?;
    Ok(())
}

/// Reject an inverted budget range
pub fn validate_filters(filters: &RequestFilters) -> Result<(), MatchError> {
    if let (Some(min), Some(max)) = (filters.min_budget, filters.max_budget) {
        if min > max {
            return Err(MatchError::Validation(format!(
                "minBudget {} exceeds maxBudget {}",
                min, max
            )));
        }
    }
    Ok(())
}

/// Validate every request in a batch, reporting the first offender by id
pub fn validate_requests(requests: &[Request]) -> Result<(), MatchError> {
    requests.iter().enumerate().try_for_each(|(index, request)| {
        validate_request(request).map_err(|e| {
            MatchError::Validation(format!("requests[{}] ({}): {}", index, request.id, e))
        })
    })
}

/// Validate every profile in a batch
pub fn validate_profiles(profiles: &[CandidateProfile]) -> Result<(), MatchError> {
    profiles.iter().enumerate().try_for_each(|(index, profile)| {
        validate_profile(profile)
            .map_err(|e| MatchError::Validation(format!("profiles[{}]: {}", index, e)))
    })
}
