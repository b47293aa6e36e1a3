// Criterion benchmarks for RFP Match

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rfp_match::core::{scoring::calculate_match_score, Matcher};
use rfp_match::models::{CandidateProfile, Request, RequestStatus, RequestType, SupplyChainRole};

const DESCRIPTIONS: &[&str] = &[
    "Ready-mix concrete and rebar steel for a three story podium",
    "Rooftop HVAC repair and preventive maintenance contract",
    "Two forklifts and a flatbed for warehouse loading, 6 weeks",
    "Drywall, insulation and lumber package for tenant improvement",
    "Architectural drawings and BIM coordination for a clinic",
];

fn create_request(id: usize) -> Request {
    Request {
        id: format!("rfp-{}", id),
        request_type: RequestType::ALL[id % RequestType::ALL.len()],
        title: format!("Request {}", id),
        description: DESCRIPTIONS[id % DESCRIPTIONS.len()].to_string(),
        requirements: Some("Prevailing wage, certified payroll".to_string()),
        region: Some(if id % 2 == 0 { "Denver, CO" } else { "Austin, TX" }.to_string()),
        required_certifications: Some(vec!["OSHA 30".to_string(), "EPA 608".to_string()]),
        budget: Some(10_000.0 + id as f64),
        timeline: None,
        status: RequestStatus::Open,
        poster_id: format!("poster-{}", id % 7),
        created_at: Utc::now() - Duration::minutes(id as i64),
    }
}

fn create_profile(id: usize) -> CandidateProfile {
    CandidateProfile {
        user_id: format!("user-{}", id),
        supply_chain_role: Some(SupplyChainRole::ALL[id % SupplyChainRole::ALL.len()]),
        region_preference: Some("denver".to_string()),
        certifications: Some(vec!["osha 30".to_string()]),
    }
}

fn bench_match_score(c: &mut Criterion) {
    let request = create_request(0);
    let profile = CandidateProfile {
        supply_chain_role: Some(SupplyChainRole::MaterialSupplier),
        ..create_profile(0)
    };

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&request), black_box(&profile)));
    });
}

fn bench_recommendations(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile = CandidateProfile {
        supply_chain_role: Some(SupplyChainRole::MaterialSupplier),
        ..create_profile(0)
    };

    let mut group = c.benchmark_group("recommend_for_candidate");

    for request_count in [10, 100, 1000, 5000].iter() {
        let requests: Vec<Request> = (0..*request_count).map(create_request).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(request_count),
            request_count,
            |b, _| {
                b.iter(|| {
                    matcher.recommend_for_candidate(black_box(&profile), black_box(requests.clone()))
                });
            },
        );
    }

    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let request = create_request(0);
    let profiles: Vec<CandidateProfile> = (0..1000).map(create_profile).collect();

    c.bench_function("find_candidates_for_request_1000_profiles", |b| {
        b.iter(|| matcher.find_candidates_for_request(black_box(&request), black_box(profiles.clone())));
    });
}

criterion_group!(benches, bench_match_score, bench_recommendations, bench_candidates);

criterion_main!(benches);
