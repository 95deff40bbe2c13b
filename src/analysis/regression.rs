//! Predicted-pay regression over a report's job set.
//!
//! This module fits a single ordinary-least-squares line of maximum salary
//! on job-evaluation points across the eligible jobs of one report, and
//! derives per-job predicted pay and pay difference from the fit. The fit is
//! a pure function over a snapshot of the job list, recomputed from scratch
//! whenever the data changes; there is no incremental update path.

use rust_decimal::Decimal;

use crate::models::{EnrichedJob, JobRecord, RegressionResult};

use super::dominance::classify_dominance;

/// Fits the predicted-pay regression line over one report's job set.
///
/// Only jobs with a point score above zero and a maximum salary above zero
/// participate in the fit; ineligible jobs are excluded from the sums but
/// still receive a predicted value afterward via [`enrich_jobs`].
///
/// Degenerate job sets produce defined results instead of NaN or panics:
///
/// - no eligible jobs: [`RegressionResult::empty`] (all fields zero);
/// - a single distinct point score (zero OLS denominator): slope 0 with the
///   mean eligible salary as intercept;
/// - identical salaries (zero total variance): `r_squared` of 1, the flat
///   fit trivially explaining all variance.
///
/// # Examples
///
/// ```
/// use equity_engine::analysis::fit_regression;
/// use equity_engine::models::JobRecord;
/// use rust_decimal::Decimal;
///
/// let jobs: Vec<JobRecord> = [(100u32, 3000i64), (200, 4000), (300, 5000)]
///     .iter()
///     .map(|&(points, salary)| JobRecord {
///         job_number: points,
///         title: format!("Class {points}"),
///         males: 1,
///         females: 1,
///         points,
///         min_salary: Decimal::ZERO,
///         max_salary: Decimal::from(salary),
///     })
///     .collect();
///
/// let regression = fit_regression(&jobs);
/// assert_eq!(regression.slope, Decimal::from(10));
/// assert_eq!(regression.intercept, Decimal::from(2000));
/// assert_eq!(regression.r_squared, Decimal::ONE);
/// ```
pub fn fit_regression(jobs: &[JobRecord]) -> RegressionResult {
    let eligible: Vec<&JobRecord> = jobs
        .iter()
        .filter(|job| job.is_regression_eligible())
        .collect();
    if eligible.is_empty() {
        return RegressionResult::empty();
    }

    let mut sum_x = Decimal::ZERO;
    let mut sum_y = Decimal::ZERO;
    let mut sum_xy = Decimal::ZERO;
    let mut sum_x_squared = Decimal::ZERO;
    let mut min_points = u32::MAX;
    let mut max_points = 0u32;

    for job in &eligible {
        let x = Decimal::from(job.points);
        let y = job.max_salary;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x_squared += x * x;
        min_points = min_points.min(job.points);
        max_points = max_points.max(job.points);
    }

    let n = Decimal::from(eligible.len() as u64);
    let denominator = n * sum_x_squared - sum_x * sum_x;
    let (slope, intercept) = if denominator.is_zero() {
        // All eligible jobs share one point score; the line degenerates to
        // the mean salary.
        (Decimal::ZERO, sum_y / n)
    } else {
        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;
        (slope, intercept)
    };

    let mean_y = sum_y / n;
    let mut ss_res = Decimal::ZERO;
    let mut ss_tot = Decimal::ZERO;
    for job in &eligible {
        let residual = job.max_salary - (slope * Decimal::from(job.points) + intercept);
        ss_res += residual * residual;
        let deviation = job.max_salary - mean_y;
        ss_tot += deviation * deviation;
    }
    let r_squared = if ss_tot.is_zero() {
        // Identical salaries leave no variance to explain.
        Decimal::ONE
    } else {
        Decimal::ONE - ss_res / ss_tot
    };

    RegressionResult {
        slope,
        intercept,
        r_squared,
        min_points,
        max_points,
        min_predicted_pay: slope * Decimal::from(min_points) + intercept,
        max_predicted_pay: slope * Decimal::from(max_points) + intercept,
    }
}

/// Evaluates the fitted line at a point score.
///
/// The line is linear and unclamped: any score is accepted, including values
/// outside the eligible minimum/maximum and outside the chart display
/// domain.
///
/// # Examples
///
/// ```
/// use equity_engine::analysis::predict_pay;
/// use equity_engine::models::RegressionResult;
/// use rust_decimal::Decimal;
///
/// let regression = RegressionResult {
///     slope: Decimal::from(10),
///     intercept: Decimal::from(2000),
///     r_squared: Decimal::ONE,
///     min_points: 100,
///     max_points: 300,
///     min_predicted_pay: Decimal::from(3000),
///     max_predicted_pay: Decimal::from(5000),
/// };
/// assert_eq!(predict_pay(Decimal::from(450), &regression), Decimal::from(6500));
/// ```
pub fn predict_pay(points: Decimal, regression: &RegressionResult) -> Decimal {
    regression.slope * points + regression.intercept
}

/// Derives predicted pay, pay difference, and dominance for every job.
///
/// Every job is enriched, including jobs excluded from the fit itself; a
/// zero-point class is predicted at the intercept. Input order is preserved.
pub fn enrich_jobs(jobs: &[JobRecord], regression: &RegressionResult) -> Vec<EnrichedJob> {
    jobs.iter()
        .map(|job| {
            let predicted_pay = predict_pay(Decimal::from(job.points), regression);
            EnrichedJob {
                predicted_pay,
                pay_difference: job.max_salary - predicted_pay,
                dominance: classify_dominance(job),
                job: job.clone(),
            }
        })
        .collect()
}
