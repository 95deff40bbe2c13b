//! Request types for the Pay Equity Statistical Analysis Engine API.
//!
//! This module defines the JSON request structures for the `/analyze` and
//! `/benefits-review` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BenefitsEntry, JobRecord};

/// Request body for the `/analyze` endpoint.
///
/// Contains the ordered job-classification records of one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The job classifications to analyze.
    pub jobs: Vec<JobRecordRequest>,
}

/// Request body for the `/benefits-review` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsReviewRequest {
    /// The job classifications of the report.
    pub jobs: Vec<JobRecordRequest>,
    /// Employer contributions entered on the benefits worksheet; jobs
    /// without an entry are treated as receiving zero.
    #[serde(default)]
    pub contributions: Vec<BenefitsEntryRequest>,
    /// Point tolerance within which two classes are of comparable value.
    /// Derived as 10% of the report's point spread when absent.
    #[serde(default)]
    pub comparable_value_range: Option<Decimal>,
}

/// Job classification information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecordRequest {
    /// Display-ordering number of the class.
    pub job_number: u32,
    /// The job classification title.
    pub title: String,
    /// Count of covered male employees.
    pub males: u32,
    /// Count of covered female employees.
    pub females: u32,
    /// Job-evaluation point score.
    pub points: u32,
    /// Minimum monthly salary for the class.
    pub min_salary: Decimal,
    /// Maximum monthly salary for the class.
    pub max_salary: Decimal,
}

/// Benefits worksheet entry in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsEntryRequest {
    /// The job number the contribution applies to.
    pub job_number: u32,
    /// Monthly employer benefit contribution for the class.
    pub employer_contribution: Decimal,
}

impl From<JobRecordRequest> for JobRecord {
    fn from(req: JobRecordRequest) -> Self {
        JobRecord {
            job_number: req.job_number,
            title: req.title,
            males: req.males,
            females: req.females,
            points: req.points,
            min_salary: req.min_salary,
            max_salary: req.max_salary,
        }
    }
}

impl From<BenefitsEntryRequest> for BenefitsEntry {
    fn from(req: BenefitsEntryRequest) -> Self {
        BenefitsEntry {
            job_number: req.job_number,
            employer_contribution: req.employer_contribution,
        }
    }
}
