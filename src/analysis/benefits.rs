//! Benefits disadvantage detection.
//!
//! This module determines whether any female-exclusive job class is
//! disadvantaged in employer benefit contributions relative to a
//! male-exclusive class of comparable value. The comparable-value tolerance
//! is supplied by the caller so the detector stays pure and testable against
//! arbitrary ranges; the portal-side derivation of that tolerance ships here
//! as a separate helper.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BenefitsEntry, JobRecord, contribution_for};

/// Share of the report's point spread that counts as comparable value.
///
/// The value is 0.10 (10%).
pub const COMPARABLE_VALUE_RANGE_PERCENT: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Derives the comparable-value point tolerance for a report.
///
/// The tolerance is [`COMPARABLE_VALUE_RANGE_PERCENT`] of the spread between
/// the highest and lowest point score across the whole job set, ineligible
/// jobs included. An empty job set has no spread and yields zero. This is
/// the worksheet-side derivation; [`detect_benefits_disadvantage`] never
/// calls it and accepts any tolerance.
///
/// # Examples
///
/// ```
/// use equity_engine::analysis::comparable_value_range;
/// use equity_engine::models::JobRecord;
/// use rust_decimal::Decimal;
///
/// let jobs: Vec<JobRecord> = [100u32, 250, 400]
///     .iter()
///     .map(|&points| JobRecord {
///         job_number: points,
///         title: format!("Class {points}"),
///         males: 1,
///         females: 1,
///         points,
///         min_salary: Decimal::ZERO,
///         max_salary: Decimal::from(2500),
///     })
///     .collect();
///
/// assert_eq!(comparable_value_range(&jobs), Decimal::from(30));
/// ```
pub fn comparable_value_range(jobs: &[JobRecord]) -> Decimal {
    let Some(first) = jobs.first() else {
        return Decimal::ZERO;
    };
    let mut min_points = first.points;
    let mut max_points = first.points;
    for job in jobs {
        min_points = min_points.min(job.points);
        max_points = max_points.max(job.points);
    }
    Decimal::from(max_points - min_points) * COMPARABLE_VALUE_RANGE_PERCENT
}

/// One detected disadvantage pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisadvantageInstance {
    /// Job number of the female-exclusive class.
    pub female_job_number: u32,
    /// Title of the female-exclusive class.
    pub female_title: String,
    /// Point score of the female-exclusive class.
    pub female_points: u32,
    /// Employer contribution recorded for the female-exclusive class.
    pub female_contribution: Decimal,
    /// Job number of the male-exclusive class.
    pub male_job_number: u32,
    /// Title of the male-exclusive class.
    pub male_title: String,
    /// Point score of the male-exclusive class.
    pub male_points: u32,
    /// Employer contribution recorded for the male-exclusive class.
    pub male_contribution: Decimal,
}

impl DisadvantageInstance {
    /// Renders the sentence reported for this pairing.
    pub fn sentence(&self) -> String {
        format!(
            "All-female class '{}' ({} points) receives an employer benefit contribution of ${} \
             while comparable all-male class '{}' ({} points) receives ${}.",
            self.female_title,
            self.female_points,
            self.female_contribution,
            self.male_title,
            self.male_points,
            self.male_contribution,
        )
    }
}

/// The outcome of a benefits disadvantage scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsDisadvantageResult {
    /// True when at least one disadvantage pairing was found.
    pub triggered: bool,
    /// Concatenation of every instance's sentence, in detection order.
    pub explanation: String,
    /// Every disadvantage pairing found, in detection order.
    pub instances: Vec<DisadvantageInstance>,
}

/// Scans for female-exclusive classes disadvantaged in benefit
/// contributions.
///
/// Every pairing of a female-exclusive job (females > 0, males == 0) with a
/// male-exclusive job (males > 0, females == 0) is tested: the pair is a
/// disadvantage instance when the point scores differ by no more than
/// `comparable_value_range` and the female class's recorded contribution is
/// strictly lower than the male class's. Jobs without a worksheet entry are
/// treated as receiving zero. All instances are reported, not just the
/// first, in (female jobs × male jobs) input order.
///
/// The scan is a pairwise O(F·M) pass; report job sets number in the tens,
/// not thousands.
///
/// # Examples
///
/// ```
/// use equity_engine::analysis::detect_benefits_disadvantage;
/// use equity_engine::models::{BenefitsEntry, JobRecord};
/// use rust_decimal::Decimal;
///
/// let female = JobRecord {
///     job_number: 1,
///     title: "Library Assistant".to_string(),
///     males: 0,
///     females: 6,
///     points: 100,
///     min_salary: Decimal::ZERO,
///     max_salary: Decimal::from(2200),
/// };
/// let male = JobRecord {
///     job_number: 2,
///     title: "Groundskeeper".to_string(),
///     males: 4,
///     females: 0,
///     points: 105,
///     min_salary: Decimal::ZERO,
///     max_salary: Decimal::from(2300),
/// };
/// let entries = vec![
///     BenefitsEntry { job_number: 1, employer_contribution: Decimal::from(50) },
///     BenefitsEntry { job_number: 2, employer_contribution: Decimal::from(80) },
/// ];
///
/// let result = detect_benefits_disadvantage(&[female, male], &entries, Decimal::from(10));
/// assert!(result.triggered);
/// assert!(result.explanation.contains("Library Assistant"));
/// assert!(result.explanation.contains("Groundskeeper"));
/// ```
pub fn detect_benefits_disadvantage(
    jobs: &[JobRecord],
    entries: &[BenefitsEntry],
    comparable_value_range: Decimal,
) -> BenefitsDisadvantageResult {
    let female_jobs = jobs.iter().filter(|job| job.is_female_exclusive());

    let mut instances = Vec::new();
    for female in female_jobs {
        let female_contribution = contribution_for(female.job_number, entries);
        for male in jobs.iter().filter(|job| job.is_male_exclusive()) {
            let point_diff = Decimal::from(female.points.abs_diff(male.points));
            if point_diff > comparable_value_range {
                continue;
            }
            let male_contribution = contribution_for(male.job_number, entries);
            if female_contribution < male_contribution {
                instances.push(DisadvantageInstance {
                    female_job_number: female.job_number,
                    female_title: female.title.clone(),
                    female_points: female.points,
                    female_contribution,
                    male_job_number: male.job_number,
                    male_title: male.title.clone(),
                    male_points: male.points,
                    male_contribution,
                });
            }
        }
    }

    let explanation = instances
        .iter()
        .map(DisadvantageInstance::sentence)
        .collect::<Vec<_>>()
        .join(" ");

    BenefitsDisadvantageResult {
        triggered: !instances.is_empty(),
        explanation,
        instances,
    }
}
