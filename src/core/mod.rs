// Core algorithm exports
pub mod filters;
pub mod keywords;
pub mod matcher;
pub mod region;
pub mod relevance;
pub mod scoring;
pub mod validation;

pub use filters::{is_own_request, matches_request_filters};
pub use keywords::keywords_for_role;
pub use matcher::{find_candidates_for_request, recommend_for_candidate, Matcher, RecommendationPage};
pub use region::region_score;
pub use relevance::{is_role_relevant, relevant_roles};
pub use scoring::{calculate_match_score, certification_score, keyword_score, score_breakdown};
