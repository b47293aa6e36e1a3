//! RFP Match - recommendation engine for a construction marketplace
//!
//! This library scores how well a posted request for proposal fits a
//! supplier or contractor profile (0-100) and ranks batches of either side.
//! Scoring is pure: no I/O, no shared state.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    calculate_match_score, find_candidates_for_request, is_role_relevant, recommend_for_candidate,
    Matcher,
};
pub use error::MatchError;
pub use models::{CandidateProfile, Request, RequestType, Scored, ScoringWeights, SupplyChainRole};
