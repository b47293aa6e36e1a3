use crate::core::{
    filters::{is_own_request, matches_request_filters},
    relevance::is_role_relevant,
    scoring::{calculate_weighted_score, score_breakdown},
};
use crate::models::{
    CandidateProfile, Request, RequestFilters, ScoreBreakdown, Scored, ScoringWeights,
};

/// Scores must be strictly above this to be recommended
pub const DEFAULT_THRESHOLD: u32 = 30;

/// One page of a candidate's recommendation feed
#[derive(Debug)]
pub struct RecommendationPage {
    pub data: Vec<Scored<Request>>,
    /// Recommendations before paging
    pub total: usize,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Guards (role present, self-exclusion, relevance gate)
/// 2. Scoring
/// 3. Threshold filter
/// 4. Deterministic sort
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    threshold: u32,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, threshold: u32) -> Self {
        Self { weights, threshold }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_THRESHOLD)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Score one pair with this matcher's weights
    pub fn score(&self, request: &Request, profile: &CandidateProfile) -> u32 {
        calculate_weighted_score(request, profile, &self.weights)
    }

    /// Score one pair and explain each signal
    pub fn explain(&self, request: &Request, profile: &CandidateProfile) -> ScoreBreakdown {
        score_breakdown(request, profile, &self.weights)
    }

    /// Rank requests for a candidate
    ///
    /// The candidate's own postings score 0 and are dropped with everything
    /// else at or below the threshold. Results are sorted by score
    /// (descending), then by creation time (newest first).
    pub fn recommend_for_candidate(
        &self,
        profile: &CandidateProfile,
        requests: Vec<Request>,
    ) -> Vec<Scored<Request>> {
        if profile.supply_chain_role.is_none() {
            return Vec::new();
        }

        let total_requests = requests.len();

        let mut recommendations: Vec<Scored<Request>> = requests
            .into_iter()
            .filter_map(|request| {
                let score = if is_own_request(&request, profile) {
                    0
                } else {
                    self.score(&request, profile)
                };
                tracing::trace!(request_id = %request.id, score, "scored request");

                (score > self.threshold).then(|| Scored::new(request, score))
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| b.item.created_at.cmp(&a.item.created_at))
        });

        tracing::debug!(
            user_id = %profile.user_id,
            total_requests,
            recommended = recommendations.len(),
            "ranked requests for candidate"
        );

        recommendations
    }

    /// Rank profiles able to answer a request
    ///
    /// Profiles failing the relevance gate are dropped before scoring, as is
    /// the request's own poster. The sort is stable, so equal scores keep
    /// their input order.
    pub fn find_candidates_for_request(
        &self,
        request: &Request,
        profiles: Vec<CandidateProfile>,
    ) -> Vec<Scored<CandidateProfile>> {
        let total_profiles = profiles.len();

        let mut candidates: Vec<Scored<CandidateProfile>> = profiles
            .into_iter()
            .filter(|profile| {
                profile
                    .supply_chain_role
                    .is_some_and(|role| is_role_relevant(request.request_type, role))
            })
            .filter(|profile| !is_own_request(request, profile))
            .filter_map(|profile| {
                let score = self.score(request, &profile);
                (score > self.threshold).then(|| Scored::new(profile, score))
            })
            .collect();

        candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            request_id = %request.id,
            total_profiles,
            candidates = candidates.len(),
            "ranked candidates for request"
        );

        candidates
    }

    /// Filtered, ranked and paged recommendation feed
    pub fn recommend_feed(
        &self,
        profile: &CandidateProfile,
        requests: Vec<Request>,
        filters: &RequestFilters,
        skip: usize,
        take: usize,
    ) -> RecommendationPage {
        let filtered: Vec<Request> = requests
            .into_iter()
            .filter(|request| matches_request_filters(request, filters))
            .collect();

        let ranked = self.recommend_for_candidate(profile, filtered);
        let total = ranked.len();
        let data = ranked.into_iter().skip(skip).take(take).collect();

        RecommendationPage { data, total }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank requests for a candidate with the default weights and threshold
pub fn recommend_for_candidate(
    profile: &CandidateProfile,
    requests: Vec<Request>,
) -> Vec<Scored<Request>> {
    Matcher::default().recommend_for_candidate(profile, requests)
}

/// Rank profiles for a request with the default weights and threshold
pub fn find_candidates_for_request(
    request: &Request,
    profiles: Vec<CandidateProfile>,
) -> Vec<Scored<CandidateProfile>> {
    Matcher::default().find_candidates_for_request(request, profiles)
}
