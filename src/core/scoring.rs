use crate::core::{
    keywords::keywords_for_role,
    region::{non_empty, weighted_region_score},
    relevance::is_role_relevant,
};
use crate::models::{CandidateProfile, Request, ScoreBreakdown, ScoringWeights, SupplyChainRole};

/// Upper bound of every match score
pub const MAX_SCORE: u32 = 100;

/// Calculate a match score (0-100) between a request and a candidate profile
///
/// Scoring formula, with the default weights:
/// score = (
///     40                        # role passes the relevance gate
///     + min(keyword_hits * 5, 30)
///     + 15 if regions overlap   # only when both sides name a region
///     + 0..=15 certifications   # only when both sides list certifications
/// )
///
/// A profile without a role, or with a role the gate rejects, scores 0.
pub fn calculate_match_score(request: &Request, profile: &CandidateProfile) -> u32 {
    calculate_weighted_score(request, profile, &ScoringWeights::default())
}

/// Same as [`calculate_match_score`] with explicit weights
pub fn calculate_weighted_score(
    request: &Request,
    profile: &CandidateProfile,
    weights: &ScoringWeights,
) -> u32 {
    let Some(role) = profile.supply_chain_role else {
        return 0;
    };
    if !is_role_relevant(request.request_type, role) {
        return 0;
    }

    let mut score = weights.relevance_base;
    score += weighted_keyword_score(request, role, weights);

    if let (Some(request_region), Some(preference)) = (
        non_empty(request.region.as_deref()),
        non_empty(profile.region_preference.as_deref()),
    ) {
        score += weighted_region_score(Some(request_region), Some(preference), weights.region);
    }

    let required = request.certifications();
    let held = profile.held_certifications();
    if !required.is_empty() && !held.is_empty() {
        score += weighted_certification_score(required, held, weights.certification);
    }

    score.min(MAX_SCORE)
}

/// Explain a match score signal by signal
///
/// `total` always equals [`calculate_weighted_score`] for the same inputs.
pub fn score_breakdown(
    request: &Request,
    profile: &CandidateProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let Some(role) = profile.supply_chain_role else {
        return ScoreBreakdown::default();
    };
    if !is_role_relevant(request.request_type, role) {
        return ScoreBreakdown::default();
    }

    let matched_keywords: Vec<String> = matched_keywords(request, role)
        .into_iter()
        .map(str::to_string)
        .collect();
    let keyword = keyword_points(matched_keywords.len(), weights);

    let region = weighted_region_score(
        request.region.as_deref(),
        profile.region_preference.as_deref(),
        weights.region,
    );

    let matched_certifications = matched_certifications(
        request.certifications(),
        profile.held_certifications(),
    );
    let certification = scale_certifications(
        matched_certifications.len(),
        request.certifications().len(),
        weights.certification,
    );

    let total = (weights.relevance_base + keyword + region + certification).min(MAX_SCORE);

    ScoreBreakdown {
        relevant: true,
        relevance: weights.relevance_base,
        keyword,
        region,
        certification,
        matched_keywords,
        matched_certifications,
        total,
    }
}

/// Keyword sub-score (0-30): 5 points per role keyword found in the request text
pub fn keyword_score(request: &Request, role: SupplyChainRole) -> u32 {
    weighted_keyword_score(request, role, &ScoringWeights::default())
}

/// Role keywords that appear as substrings of the request text
pub fn matched_keywords(request: &Request, role: SupplyChainRole) -> Vec<&'static str> {
    let text = request.searchable_text();
    keywords_for_role(Some(role))
        .iter()
        .copied()
        .filter(|keyword| text.contains(keyword))
        .collect()
}

fn weighted_keyword_score(request: &Request, role: SupplyChainRole, weights: &ScoringWeights) -> u32 {
    keyword_points(matched_keywords(request, role).len(), weights)
}

#[inline]
fn keyword_points(hits: usize, weights: &ScoringWeights) -> u32 {
    let hits = u32::try_from(hits).unwrap_or(u32::MAX);
    hits.saturating_mul(weights.keyword_per_hit).min(weights.keyword_max)
}

/// Certification sub-score (0-15)
///
/// Counts held certifications that are also required (case-insensitive).
/// Covering every required certification earns full credit; partial
/// coverage scales linearly, rounding half away from zero (1 of 2 -> 8).
pub fn certification_score(required: &[String], held: &[String]) -> u32 {
    weighted_certification_score(required, held, ScoringWeights::default().certification)
}

fn weighted_certification_score(required: &[String], held: &[String], points: u32) -> u32 {
    scale_certifications(matched_certifications(required, held).len(), required.len(), points)
}

/// Held certifications (lower-cased) that appear in the required list
///
/// Duplicate held entries are kept, so the count may exceed `required.len()`.
pub fn matched_certifications(required: &[String], held: &[String]) -> Vec<String> {
    let required: Vec<String> = required.iter().map(|c| c.to_lowercase()).collect();
    held.iter()
        .map(|c| c.to_lowercase())
        .filter(|c| required.contains(c))
        .collect()
}

#[inline]
fn scale_certifications(matches: usize, required: usize, points: u32) -> u32 {
    if matches == 0 || required == 0 {
        return 0;
    }
    if matches >= required {
        return points;
    }
    // f64::round rounds half away from zero
    (matches as f64 / required as f64 * points as f64).round() as u32
}
