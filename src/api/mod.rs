//! HTTP API module for the Pay Equity Statistical Analysis Engine.
//!
//! This module provides the REST API endpoints for running the pay-equity
//! analysis and the benefits disadvantage review over a report's job
//! classifications.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{
    AnalysisRequest, BenefitsEntryRequest, BenefitsReviewRequest, JobRecordRequest,
};
pub use response::{AnalysisResponse, ApiError, ApiErrorResponse, BenefitsReviewResponse};
