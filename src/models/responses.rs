use serde::{Deserialize, Serialize};

use crate::models::domain::{RequestType, ScoreBreakdown, SupplyChainRole};

/// Paged list of scored items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
}

/// Response for a single score lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchResponse {
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Response for a relevance-gate lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceResponse {
    #[serde(rename = "requestType")]
    pub request_type: RequestType,
    pub role: SupplyChainRole,
    pub relevant: bool,
}

/// Roles admitted for one request type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevantRolesResponse {
    #[serde(rename = "requestType")]
    pub request_type: RequestType,
    pub roles: Vec<SupplyChainRole>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
