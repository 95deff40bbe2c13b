//! Response types for the Pay Equity Statistical Analysis Engine API.
//!
//! This module defines the success envelopes for the analysis endpoints and
//! the error response structures shared across the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{ChartData, DisadvantageInstance};
use crate::error::EngineError;
use crate::models::{EnrichedJob, RegressionResult};

/// Response body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Unique identifier for this analysis run.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// The fitted predicted-pay regression.
    pub regression: RegressionResult,
    /// Every job of the report with its derived values, in input order.
    pub jobs: Vec<EnrichedJob>,
    /// Plotting series for the scatter chart.
    pub chart: ChartData,
}

/// Response body for the `/benefits-review` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsReviewResponse {
    /// Unique identifier for this analysis run.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// The point tolerance the scan used, either supplied or derived.
    pub comparable_value_range: Decimal,
    /// True when at least one disadvantage pairing was found.
    pub triggered: bool,
    /// Concatenation of every instance's sentence, in detection order.
    pub explanation: String,
    /// Every disadvantage pairing found, in detection order.
    pub instances: Vec<DisadvantageInstance>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidJob {
                job_number,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_JOB",
                    format!("Invalid job {}: {}", job_number, message),
                    "The job record contains invalid information",
                ),
            },
            EngineError::InvalidContribution {
                job_number,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CONTRIBUTION",
                    format!("Invalid contribution for job {}: {}", job_number, message),
                    "The benefits worksheet entry contains invalid information",
                ),
            },
            EngineError::InvalidRange { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    format!("Invalid comparable value range: {}", message),
                    "The comparable value range is not usable for the scan",
                ),
            },
        }
    }
}
