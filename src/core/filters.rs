use crate::core::region::non_empty;
use crate::models::{CandidateProfile, Request, RequestFilters};

/// Never recommend a party its own posting
#[inline]
pub fn is_own_request(request: &Request, profile: &CandidateProfile) -> bool {
    request.poster_id == profile.user_id
}

/// Check if a request passes the marketplace list filters
///
/// Every filter is optional; an unset filter admits everything. A request
/// missing the field a filter inspects (region, budget) does not pass it.
#[inline]
pub fn matches_request_filters(request: &Request, filters: &RequestFilters) -> bool {
    if let Some(request_type) = filters.request_type {
        if request.request_type != request_type {
            return false;
        }
    }

    if let Some(status) = filters.status {
        if request.status != status {
            return false;
        }
    }

    if let Some(poster_id) = non_empty(filters.poster_id.as_deref()) {
        if request.poster_id != poster_id {
            return false;
        }
    }

    if let Some(region) = non_empty(filters.region.as_deref()) {
        match request.region.as_deref() {
            Some(request_region) if request_region.to_lowercase().contains(&region.to_lowercase()) => {}
            _ => return false,
        }
    }

    if !matches_budget(request.budget, filters.min_budget, filters.max_budget) {
        return false;
    }

    if let Some(term) = non_empty(filters.search_term.as_deref()) {
        if !request.searchable_text().contains(&term.to_lowercase()) {
            return false;
        }
    }

    true
}

/// Inclusive budget range check
#[inline]
fn matches_budget(budget: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(budget) = budget else {
        return false;
    };
    min.map_or(true, |min| budget >= min) && max.map_or(true, |max| budget <= max)
}
