//! Gender dominance classification.
//!
//! This module classifies a job class as male-dominated, female-dominated,
//! or balanced based on the composition of its covered employees. The
//! statutory thresholds differ by gender and are held as two separate
//! constants so a future change to one cannot silently affect the other.

use rust_decimal::Decimal;

use crate::models::{GenderDominance, JobRecord};

/// Male share at or above this value classifies a class as male-dominated.
///
/// The value is 0.80 (80%).
pub const MALE_DOMINANCE_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 2);

/// Female share at or above this value classifies a class as female-dominated.
///
/// The value is 0.70 (70%); intentionally lower than the male threshold.
pub const FEMALE_DOMINANCE_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 2);

/// Classifies a job class by the gender composition of its employees.
///
/// The male share is tested first against [`MALE_DOMINANCE_THRESHOLD`], then
/// the female share against [`FEMALE_DOMINANCE_THRESHOLD`]; a class meeting
/// neither, or with no covered employees at all, is balanced. Shares are
/// computed in `Decimal` so a share of exactly 0.80 or 0.70 lands on the
/// threshold rather than a rounding neighbor.
///
/// Classification is total over all non-negative counts; there are no error
/// conditions.
///
/// # Examples
///
/// ```
/// use equity_engine::analysis::classify_dominance;
/// use equity_engine::models::{GenderDominance, JobRecord};
/// use rust_decimal::Decimal;
///
/// let job = JobRecord {
///     job_number: 1,
///     title: "Accounting Technician".to_string(),
///     males: 4,
///     females: 1,
///     points: 180,
///     min_salary: Decimal::new(200000, 2),
///     max_salary: Decimal::new(260000, 2),
/// };
/// assert_eq!(classify_dominance(&job), GenderDominance::Male);
/// ```
pub fn classify_dominance(job: &JobRecord) -> GenderDominance {
    let total = job.total_employees();
    if total == 0 {
        // No employees, no basis to claim dominance.
        return GenderDominance::Balanced;
    }

    let total = Decimal::from(total);
    let male_share = Decimal::from(job.males) / total;
    if male_share >= MALE_DOMINANCE_THRESHOLD {
        return GenderDominance::Male;
    }

    let female_share = Decimal::from(job.females) / total;
    if female_share >= FEMALE_DOMINANCE_THRESHOLD {
        return GenderDominance::Female;
    }

    GenderDominance::Balanced
}
