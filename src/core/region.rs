/// Points awarded when request and candidate regions overlap
pub const REGION_MATCH_POINTS: u32 = 15;

/// Case-insensitive containment in either direction
///
/// "New York, NY" and "new york" overlap; "Austin" and "Texas" do not.
#[inline]
pub fn regions_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Region sub-score (0 or 15)
///
/// An absent or empty region on either side contributes nothing.
pub fn region_score(request_region: Option<&str>, candidate_region: Option<&str>) -> u32 {
    weighted_region_score(request_region, candidate_region, REGION_MATCH_POINTS)
}

pub(crate) fn weighted_region_score(
    request_region: Option<&str>,
    candidate_region: Option<&str>,
    points: u32,
) -> u32 {
    match (non_empty(request_region), non_empty(candidate_region)) {
        (Some(request), Some(candidate)) if regions_overlap(request, candidate) => points,
        _ => 0,
    }
}

#[inline]
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
