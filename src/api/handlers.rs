//! HTTP request handlers for the Pay Equity Statistical Analysis Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers validate inputs at the boundary before invoking the analysis
//! core, which itself assumes validated data and never fails.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{
    build_chart_data, comparable_value_range, detect_benefits_disadvantage, enrich_jobs,
    fit_regression,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{BenefitsEntry, JobRecord};

use super::request::{AnalysisRequest, BenefitsReviewRequest};
use super::response::{AnalysisResponse, ApiError, ApiErrorResponse, BenefitsReviewResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/benefits-review", post(benefits_review_handler))
}

/// Handler for POST /analyze endpoint.
///
/// Accepts a report's job classifications and returns the regression fit,
/// the enriched jobs, and the chart series.
async fn analyze_handler(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let jobs: Vec<JobRecord> = request.jobs.into_iter().map(Into::into).collect();

    if let Err(err) = validate_jobs(&jobs) {
        warn!(correlation_id = %correlation_id, error = %err, "Job validation failed");
        let api_error: ApiErrorResponse = err.into();
        return error_response(api_error);
    }

    let start_time = Instant::now();
    let regression = fit_regression(&jobs);
    let enriched = enrich_jobs(&jobs, &regression);
    let chart = build_chart_data(&enriched, &regression);

    info!(
        correlation_id = %correlation_id,
        jobs_count = jobs.len(),
        slope = %regression.slope,
        r_squared = %regression.r_squared,
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed successfully"
    );

    let response = AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        regression,
        jobs: enriched,
        chart,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /benefits-review endpoint.
///
/// Accepts a report's job classifications with benefits worksheet entries
/// and returns the disadvantage scan result. The comparable value range
/// defaults to 10% of the report's point spread when not supplied.
async fn benefits_review_handler(
    payload: Result<Json<BenefitsReviewRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing benefits review request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let jobs: Vec<JobRecord> = request.jobs.into_iter().map(Into::into).collect();
    let contributions: Vec<BenefitsEntry> =
        request.contributions.into_iter().map(Into::into).collect();

    let validated = validate_jobs(&jobs)
        .and_then(|()| validate_contributions(&contributions))
        .and_then(|()| validate_range(request.comparable_value_range));
    if let Err(err) = validated {
        warn!(correlation_id = %correlation_id, error = %err, "Benefits validation failed");
        let api_error: ApiErrorResponse = err.into();
        return error_response(api_error);
    }

    let range = request
        .comparable_value_range
        .unwrap_or_else(|| comparable_value_range(&jobs));

    let start_time = Instant::now();
    let result = detect_benefits_disadvantage(&jobs, &contributions, range);

    info!(
        correlation_id = %correlation_id,
        jobs_count = jobs.len(),
        comparable_value_range = %range,
        triggered = result.triggered,
        instances = result.instances.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Benefits review completed successfully"
    );

    let response = BenefitsReviewResponse {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        comparable_value_range: range,
        triggered: result.triggered,
        explanation: result.explanation,
        instances: result.instances,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Maps a JSON extraction rejection onto the error body contract.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Rejects malformed job records before the core runs.
///
/// The analysis core assumes validated, non-negative inputs and does not
/// re-validate them.
fn validate_jobs(jobs: &[JobRecord]) -> EngineResult<()> {
    for job in jobs {
        if job.title.trim().is_empty() {
            return Err(EngineError::InvalidJob {
                job_number: job.job_number,
                message: "title must not be empty".to_string(),
            });
        }
        if job.min_salary < Decimal::ZERO {
            return Err(EngineError::InvalidJob {
                job_number: job.job_number,
                message: "min_salary must not be negative".to_string(),
            });
        }
        if job.max_salary < Decimal::ZERO {
            return Err(EngineError::InvalidJob {
                job_number: job.job_number,
                message: "max_salary must not be negative".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_contributions(entries: &[BenefitsEntry]) -> EngineResult<()> {
    for entry in entries {
        if entry.employer_contribution < Decimal::ZERO {
            return Err(EngineError::InvalidContribution {
                job_number: entry.job_number,
                message: "employer_contribution must not be negative".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_range(range: Option<Decimal>) -> EngineResult<()> {
    match range {
        Some(value) if value < Decimal::ZERO => Err(EngineError::InvalidRange {
            message: "must not be negative".to_string(),
        }),
        _ => Ok(()),
    }
}
