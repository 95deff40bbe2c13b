//! Benefits contribution model.
//!
//! This module defines the per-job employer benefit contribution entered on
//! the benefits worksheet. An entry is not required for every job; jobs
//! without one are treated as receiving a zero contribution at detection
//! time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employer benefit contribution for one job class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsEntry {
    /// The job number the contribution applies to.
    pub job_number: u32,
    /// Monthly employer benefit contribution for the class.
    pub employer_contribution: Decimal,
}

/// Looks up the employer contribution recorded for a job number.
///
/// Jobs with no worksheet entry default to a zero contribution.
///
/// # Examples
///
/// ```
/// use equity_engine::models::{contribution_for, BenefitsEntry};
/// use rust_decimal::Decimal;
///
/// let entries = vec![BenefitsEntry {
///     job_number: 3,
///     employer_contribution: Decimal::new(8000, 2),
/// }];
/// assert_eq!(contribution_for(3, &entries), Decimal::new(8000, 2));
/// assert_eq!(contribution_for(4, &entries), Decimal::ZERO);
/// ```
pub fn contribution_for(job_number: u32, entries: &[BenefitsEntry]) -> Decimal {
    entries
        .iter()
        .find(|entry| entry.job_number == job_number)
        .map(|entry| entry.employer_contribution)
        .unwrap_or(Decimal::ZERO)
}
