use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{
    relevance::{is_role_relevant, relevant_roles},
    validation::{validate_filters, validate_profile, validate_profiles, validate_request, validate_requests},
    Matcher,
};
use crate::error::MatchError;
use crate::models::{
    CandidatesRequest, HealthResponse, RecommendationsRequest, RelevanceQuery, RelevanceResponse,
    RelevantRolesResponse, RequestType, ScoreMatchRequest, ScoreMatchResponse, ScoredListResponse,
    SupplyChainRole,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    /// Clamp a caller-supplied page size to the configured bounds
    fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.matching.default_limit)
            .min(self.matching.max_limit)
    }
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/score", web::post().to(score_match))
        .route("/recommendations", web::post().to(recommendations))
        .route("/candidates", web::post().to(candidates))
        .route("/relevance", web::get().to(role_relevance))
        .route("/relevance/{request_type}", web::get().to(relevant_roles_for_type));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single request against a single profile
///
/// POST /api/v1/match/score
///
/// Request body:
/// ```json
/// {
///   "request": { "id": "rfp-1", "type": "PROJECT", "title": "...", "posterId": "u1", "createdAt": "..." },
///   "profile": { "userId": "u2", "supplyChainRole": "MATERIAL_SUPPLIER" }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> Result<HttpResponse, MatchError> {
    validate_request(&req.request)?;
    validate_profile(&req.profile)?;

    let breakdown = state.matcher.explain(&req.request, &req.profile);

    tracing::info!(
        "Scored request {} for user {}: {}",
        req.request.id,
        req.profile.user_id,
        breakdown.total
    );

    Ok(HttpResponse::Ok().json(ScoreMatchResponse {
        match_score: breakdown.total,
        breakdown,
    }))
}

/// Recommendation feed for a candidate
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "profile": { "userId": "u2", "supplyChainRole": "MATERIAL_SUPPLIER" },
///   "requests": [ ... ],
///   "filters": { "type": "PART_SUPPLY", "region": "Denver" },
///   "skip": 0,
///   "take": 20
/// }
/// ```
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()?;
    validate_profile(&req.profile)?;
    validate_requests(&req.requests)?;

    let RecommendationsRequest {
        profile,
        requests,
        filters,
        skip,
        take,
    } = req.into_inner();

    let filters = filters.unwrap_or_default();
    validate_filters(&filters)?;

    let take = state.page_size(take);
    let total_requests = requests.len();

    let page = state
        .matcher
        .recommend_feed(&profile, requests, &filters, skip, take);

    tracing::info!(
        "Returning {} of {} recommendations for user {} (from {} requests)",
        page.data.len(),
        page.total,
        profile.user_id,
        total_requests
    );

    Ok(HttpResponse::Ok().json(ScoredListResponse {
        data: page.data,
        total: page.total,
    }))
}

/// Best candidates to answer a request
///
/// POST /api/v1/candidates
///
/// Request body:
/// ```json
/// {
///   "request": { ... },
///   "profiles": [ ... ],
///   "limit": 20
/// }
/// ```
async fn candidates(
    state: web::Data<AppState>,
    req: web::Json<CandidatesRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()?;
    validate_request(&req.request)?;
    validate_profiles(&req.profiles)?;

    let CandidatesRequest {
        request,
        profiles,
        limit,
    } = req.into_inner();

    let limit = state.page_size(limit);
    let total_profiles = profiles.len();

    let mut ranked = state.matcher.find_candidates_for_request(&request, profiles);
    let total = ranked.len();
    ranked.truncate(limit);

    tracing::info!(
        "Returning {} of {} candidates for request {} (from {} profiles)",
        ranked.len(),
        total,
        request.id,
        total_profiles
    );

    Ok(HttpResponse::Ok().json(ScoredListResponse { data: ranked, total }))
}

/// Relevance gate lookup for UI badges
///
/// GET /api/v1/relevance?requestType={type}&role={role}
async fn role_relevance(query: web::Query<RelevanceQuery>) -> Result<HttpResponse, MatchError> {
    let request_type: RequestType = query.request_type.parse()?;
    let role: SupplyChainRole = query.role.parse()?;

    let relevant = is_role_relevant(request_type, role);
    tracing::debug!("Relevance {} / {} = {}", request_type, role, relevant);

    Ok(HttpResponse::Ok().json(RelevanceResponse {
        request_type,
        role,
        relevant,
    }))
}

/// Roles admitted for a request type
///
/// GET /api/v1/relevance/{requestType}
async fn relevant_roles_for_type(path: web::Path<String>) -> Result<HttpResponse, MatchError> {
    let request_type: RequestType = path.parse()?;

    Ok(HttpResponse::Ok().json(RelevantRolesResponse {
        request_type,
        roles: relevant_roles(request_type).to_vec(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateProfile, ErrorResponse, Request, Scored};
    use crate::routes::{configure_extractors, configure_routes};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn test_state() -> AppState {
        AppState {
            matcher: Matcher::with_default_weights(),
            matching: MatchingSettings::default(),
        }
    }

    fn request_json(id: &str, request_type: &str, description: &str, poster: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": request_type,
            "title": format!("RFP {}", id),
            "description": description,
            "posterId": poster,
            "createdAt": "2024-04-02T10:00:00Z"
        })
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state()))
                    .configure(|cfg| configure_extractors(cfg, 1 << 20))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
    }

    #[actix_web::test]
    async fn test_score_endpoint() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/score")
            .set_json(json!({
                "request": request_json("r1", "PROJECT", "concrete and steel", "u1"),
                "profile": { "userId": "u2", "supplyChainRole": "MATERIAL_SUPPLIER" }
            }))
            .to_request();
        let body: ScoreMatchResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.match_score, 50);
        assert_eq!(body.breakdown.keyword, 10);
    }

    #[actix_web::test]
    async fn test_recommendations_endpoint() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/recommendations")
            .set_json(json!({
                "profile": { "userId": "u1", "supplyChainRole": "MATERIAL_SUPPLIER" },
                "requests": [
                    request_json("own", "PART_SUPPLY", "concrete lumber steel", "u1"),
                    request_json("other", "PART_SUPPLY", "gravel", "u9"),
                    request_json("svc", "SERVICE", "steel", "u9")
                ]
            }))
            .to_request();
        let body: ScoredListResponse<Scored<Request>> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 1);
        assert_eq!(body.data[0].item.id, "other");
        assert_eq!(body.data[0].match_score, 45);
    }

    #[actix_web::test]
    async fn test_candidates_endpoint_respects_limit() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/candidates")
            .set_json(json!({
                "request": request_json("r", "RENTAL", "forklift delivery", "poster"),
                "profiles": [
                    { "userId": "a", "supplyChainRole": "FORKLIFT_PROVIDER" },
                    { "userId": "b", "supplyChainRole": "TRUCKING_PROVIDER" },
                    { "userId": "c", "supplyChainRole": "ARCHITECT" }
                ],
                "limit": 1
            }))
            .to_request();
        let body: ScoredListResponse<Scored<CandidateProfile>> =
            test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 2);
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].item.user_id, "a");
    }

    #[actix_web::test]
    async fn test_relevance_endpoints() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/v1/relevance?requestType=RENTAL&role=FORKLIFT_PROVIDER")
            .to_request();
        let body: RelevanceResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.relevant);

        let req = test::TestRequest::get()
            .uri("/api/v1/relevance/PART_SUPPLY")
            .to_request();
        let body: RelevantRolesResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.roles, vec![SupplyChainRole::MaterialSupplier]);
    }

    #[actix_web::test]
    async fn test_unknown_role_is_bad_request() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/api/v1/relevance?requestType=RENTAL&role=WELDER")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "unknown_role");
    }

    #[actix_web::test]
    async fn test_missing_identifier_is_bad_request() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/score")
            .set_json(json!({
                "request": request_json("r1", "PROJECT", "steel", ""),
                "profile": { "userId": "u2", "supplyChainRole": "MATERIAL_SUPPLIER" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "validation_failed");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/score")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "invalid_payload");
    }
}
