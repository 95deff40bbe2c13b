//! Comprehensive integration tests for the Pay Equity Statistical Analysis
//! Engine.
//!
//! This test suite covers the analysis scenarios end-to-end through the
//! HTTP API:
//! - Regression fit, enrichment, and chart derivation
//! - Degenerate job sets (empty, single distinct point score)
//! - Gender dominance classification in the enriched output
//! - Benefits disadvantage review, supplied and derived ranges
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use equity_engine::api::create_router;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    d.normalize().to_string()
}

fn assert_decimal_field(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_job(
    job_number: u32,
    title: &str,
    males: u32,
    females: u32,
    points: u32,
    max_salary: &str,
) -> Value {
    json!({
        "job_number": job_number,
        "title": title,
        "males": males,
        "females": females,
        "points": points,
        "min_salary": "0",
        "max_salary": max_salary
    })
}

fn perfectly_linear_jobs() -> Vec<Value> {
    vec![
        create_job(1, "Clerk Typist 2", 1, 9, 100, "3000"),
        create_job(2, "Accounting Technician", 5, 5, 200, "4000"),
        create_job(3, "Programmer Analyst", 8, 2, 300, "5000"),
    ]
}

// =============================================================================
// /analyze
// =============================================================================

#[tokio::test]
async fn test_analyze_perfectly_linear_report() {
    let router = create_router_for_test();
    let body = json!({ "jobs": perfectly_linear_jobs() });

    let (status, result) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);

    let regression = &result["regression"];
    assert_decimal_field(&regression["slope"], "10");
    assert_decimal_field(&regression["intercept"], "2000");
    assert_decimal_field(&regression["r_squared"], "1");
    assert_eq!(regression["min_points"].as_u64().unwrap(), 100);
    assert_eq!(regression["max_points"].as_u64().unwrap(), 300);
    assert_decimal_field(&regression["min_predicted_pay"], "3000");
    assert_decimal_field(&regression["max_predicted_pay"], "5000");

    // Each job sits exactly on the line.
    let jobs = result["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 3);
    for enriched in jobs {
        assert_decimal_field(&enriched["pay_difference"], "0");
        assert_eq!(
            normalize_decimal(enriched["predicted_pay"].as_str().unwrap()),
            normalize_decimal(enriched["job"]["max_salary"].as_str().unwrap()),
        );
    }
}

#[tokio::test]
async fn test_analyze_reports_dominance_per_job() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": [
            create_job(1, "Maintenance Worker 1", 8, 2, 150, "2500"),
            create_job(2, "Library Assistant", 0, 7, 160, "2300"),
            create_job(3, "Accounting Technician", 3, 3, 170, "2600"),
        ]
    });

    let (status, result) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let jobs = result["jobs"].as_array().unwrap();
    assert_eq!(jobs[0]["dominance"].as_str().unwrap(), "male");
    assert_eq!(jobs[1]["dominance"].as_str().unwrap(), "female");
    assert_eq!(jobs[2]["dominance"].as_str().unwrap(), "balanced");
}

#[tokio::test]
async fn test_analyze_chart_partitions_and_extends() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": [
            create_job(1, "Maintenance Worker 1", 8, 0, 100, "3000"),
            create_job(2, "Library Assistant", 0, 7, 300, "5000"),
        ]
    });

    let (status, result) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let chart = &result["chart"];
    assert_eq!(chart["male_series"].as_array().unwrap().len(), 1);
    assert_eq!(chart["female_series"].as_array().unwrap().len(), 1);
    assert!(chart["balanced_series"].as_array().unwrap().is_empty());

    let segment = chart["regression_segment"].as_array().unwrap();
    assert_eq!(segment[0]["x"].as_i64().unwrap(), 100);
    assert_eq!(segment[1]["x"].as_i64().unwrap(), 300);

    // 100 - 500 clamps to the display floor; 300 + 500 does not clamp.
    let extension = chart["extension_segment"].as_array().unwrap();
    assert_eq!(extension[0]["x"].as_i64().unwrap(), -340);
    assert_eq!(extension[1]["x"].as_i64().unwrap(), 800);
}

#[tokio::test]
async fn test_analyze_empty_report_yields_zero_result() {
    let router = create_router_for_test();
    let body = json!({ "jobs": [] });

    let (status, result) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let regression = &result["regression"];
    assert_decimal_field(&regression["slope"], "0");
    assert_decimal_field(&regression["intercept"], "0");
    assert_decimal_field(&regression["r_squared"], "0");
    assert!(result["jobs"].as_array().unwrap().is_empty());

    let chart = &result["chart"];
    assert!(chart["male_series"].as_array().unwrap().is_empty());
    let segment = chart["regression_segment"].as_array().unwrap();
    assert_eq!(segment[0], segment[1]);
    let extension = chart["extension_segment"].as_array().unwrap();
    assert_eq!(extension[0], extension[1]);
}

#[tokio::test]
async fn test_analyze_single_distinct_point_score_is_defined() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": [
            create_job(1, "Clerk Typist 2", 1, 9, 150, "3000"),
            create_job(2, "Clerk Typist 3", 1, 9, 150, "4000"),
        ]
    });

    let (status, result) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    let regression = &result["regression"];
    assert_decimal_field(&regression["slope"], "0");
    assert_decimal_field(&regression["intercept"], "3500");
    assert_decimal_field(&regression["r_squared"], "0");
}

#[tokio::test]
async fn test_analyze_zero_point_jobs_are_predicted_but_not_fitted() {
    let router = create_router_for_test();
    let mut jobs = perfectly_linear_jobs();
    jobs.push(create_job(4, "Trainee", 1, 1, 0, "1500"));
    let body = json!({ "jobs": jobs });

    let (status, result) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    // The fit is unchanged by the ineligible job.
    assert_decimal_field(&result["regression"]["slope"], "10");
    assert_eq!(result["regression"]["min_points"].as_u64().unwrap(), 100);

    // The ineligible job still receives a prediction at the intercept.
    let trainee = &result["jobs"].as_array().unwrap()[3];
    assert_decimal_field(&trainee["predicted_pay"], "2000");
    assert_decimal_field(&trainee["pay_difference"], "-500");
}

#[tokio::test]
async fn test_analyze_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"].as_str().unwrap(), "MALFORMED_JSON");
}

#[tokio::test]
async fn test_analyze_missing_field_returns_400() {
    let router = create_router_for_test();
    // Job without a title field.
    let body = json!({
        "jobs": [{
            "job_number": 1,
            "males": 1,
            "females": 1,
            "points": 100,
            "min_salary": "0",
            "max_salary": "3000"
        }]
    });

    let (status, error) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        error["message"]
            .as_str()
            .unwrap()
            .contains("missing field"),
        "Expected error message to mention the missing field, got: {}",
        error["message"]
    );
}

#[tokio::test]
async fn test_analyze_negative_salary_returns_400() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": [create_job(9, "Clerk Typist 2", 1, 1, 100, "-1")]
    });

    let (status, error) = post_json(router, "/analyze", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"].as_str().unwrap(), "INVALID_JOB");
    assert!(error["message"].as_str().unwrap().contains("job 9"));
}

// =============================================================================
// /benefits-review
// =============================================================================

fn benefits_pair() -> Vec<Value> {
    vec![
        create_job(1, "Library Assistant", 0, 6, 100, "2200"),
        create_job(2, "Groundskeeper", 4, 0, 105, "2300"),
    ]
}

#[tokio::test]
async fn test_benefits_review_triggers_for_comparable_pair() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": benefits_pair(),
        "contributions": [
            { "job_number": 1, "employer_contribution": "50" },
            { "job_number": 2, "employer_contribution": "80" }
        ],
        "comparable_value_range": "10"
    });

    let (status, result) = post_json(router, "/benefits-review", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["triggered"].as_bool().unwrap());
    let explanation = result["explanation"].as_str().unwrap();
    assert!(explanation.contains("Library Assistant"));
    assert!(explanation.contains("Groundskeeper"));
    assert_eq!(result["instances"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_benefits_review_does_not_trigger_outside_range() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": benefits_pair(),
        "contributions": [
            { "job_number": 1, "employer_contribution": "50" },
            { "job_number": 2, "employer_contribution": "80" }
        ],
        "comparable_value_range": "2"
    });

    let (status, result) = post_json(router, "/benefits-review", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!result["triggered"].as_bool().unwrap());
    assert!(result["explanation"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_benefits_review_equal_contributions_never_trigger() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": benefits_pair(),
        "contributions": [
            { "job_number": 1, "employer_contribution": "80" },
            { "job_number": 2, "employer_contribution": "80" }
        ],
        "comparable_value_range": "1000"
    });

    let (status, result) = post_json(router, "/benefits-review", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!result["triggered"].as_bool().unwrap());
}

#[tokio::test]
async fn test_benefits_review_derives_range_from_point_spread() {
    let router = create_router_for_test();
    // Spread is 200 - 100 = 100, so the derived range is 10 and the pair at
    // 5 points apart is comparable.
    let mut jobs = benefits_pair();
    jobs.push(create_job(3, "Programmer Analyst", 3, 3, 200, "3200"));
    let body = json!({
        "jobs": jobs,
        "contributions": [
            { "job_number": 1, "employer_contribution": "50" },
            { "job_number": 2, "employer_contribution": "80" }
        ]
    });

    let (status, result) = post_json(router, "/benefits-review", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["comparable_value_range"], "10");
    assert!(result["triggered"].as_bool().unwrap());
}

#[tokio::test]
async fn test_benefits_review_missing_contribution_defaults_to_zero() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": benefits_pair(),
        "contributions": [
            { "job_number": 2, "employer_contribution": "80" }
        ],
        "comparable_value_range": "10"
    });

    let (status, result) = post_json(router, "/benefits-review", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["triggered"].as_bool().unwrap());
    let instance = &result["instances"].as_array().unwrap()[0];
    assert_decimal_field(&instance["female_contribution"], "0");
    assert_decimal_field(&instance["male_contribution"], "80");
}

#[tokio::test]
async fn test_benefits_review_aggregates_all_instances() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": [
            create_job(1, "Library Assistant", 0, 6, 100, "2200"),
            create_job(2, "Records Clerk", 0, 3, 110, "2250"),
            create_job(3, "Groundskeeper", 4, 0, 105, "2300"),
            create_job(4, "Meter Reader", 2, 0, 115, "2350"),
        ],
        "contributions": [
            { "job_number": 1, "employer_contribution": "40" },
            { "job_number": 2, "employer_contribution": "50" },
            { "job_number": 3, "employer_contribution": "80" },
            { "job_number": 4, "employer_contribution": "90" }
        ],
        "comparable_value_range": "20"
    });

    let (status, result) = post_json(router, "/benefits-review", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["triggered"].as_bool().unwrap());
    assert_eq!(result["instances"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_benefits_review_without_exclusive_jobs_is_untriggered() {
    let router = create_router_for_test();
    let body = json!({
        "jobs": [create_job(1, "Accounting Technician", 5, 5, 150, "2600")],
        "comparable_value_range": "50"
    });

    let (status, result) = post_json(router, "/benefits-review", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!result["triggered"].as_bool().unwrap());
    assert!(result["explanation"].as_str().unwrap().is_empty());
    assert!(result["instances"].as_array().unwrap().is_empty());
}
