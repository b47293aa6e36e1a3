// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Request, RequestFilters, RequestStatus, RequestType, ScoreBreakdown, Scored,
    ScoringWeights, SupplyChainRole,
};
pub use requests::{CandidatesRequest, RecommendationsRequest, RelevanceQuery, ScoreMatchRequest};
pub use responses::{
    ErrorResponse, HealthResponse, RelevanceResponse, RelevantRolesResponse, ScoreMatchResponse,
    ScoredListResponse,
};
