use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateProfile, Request, RequestFilters};

/// Request to score a single RFP against a single profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchRequest {
    pub request: Request,
    pub profile: CandidateProfile,
}

/// Request for a candidate's recommendation feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub requests: Vec<Request>,
    #[serde(default)]
    pub filters: Option<RequestFilters>,
    #[serde(default)]
    pub skip: usize,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub take: Option<usize>,
}

/// Request for the best candidates to answer an RFP
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidatesRequest {
    pub request: Request,
    #[serde(default)]
    pub profiles: Vec<CandidateProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query for a single relevance-gate lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceQuery {
    #[serde(alias = "request_type", rename = "requestType")]
    pub request_type: String,
    pub role: String,
}
