//! Derived analysis models.
//!
//! This module contains the [`GenderDominance`] classification, the
//! [`RegressionResult`] of the predicted-pay fit, and the [`EnrichedJob`]
//! record that pairs a job with its derived values. All derived values are
//! recomputed from scratch on every analysis invocation; nothing here is
//! cached or incrementally updated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::JobRecord;

/// Gender dominance classification of a job class.
///
/// A class is dominated when one gender's share of covered employees meets
/// the statutory threshold; the thresholds differ by gender, see
/// [`crate::analysis::classify_dominance`].
///
/// # Example
///
/// ```
/// use equity_engine::models::GenderDominance;
///
/// let dominance = GenderDominance::Female;
/// assert_eq!(format!("{}", dominance), "Female");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderDominance {
    /// Male share of covered employees meets the male dominance threshold.
    Male,
    /// Female share of covered employees meets the female dominance threshold.
    Female,
    /// Neither threshold is met, or the class has no covered employees.
    Balanced,
}

impl std::fmt::Display for GenderDominance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenderDominance::Male => write!(f, "Male"),
            GenderDominance::Female => write!(f, "Female"),
            GenderDominance::Balanced => write!(f, "Balanced"),
        }
    }
}

/// The fitted predicted-pay regression over one report's job set.
///
/// Produced once per job set by [`crate::analysis::fit_regression`]; stale if
/// the job set changes and must be recomputed, never incrementally updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the ordinary-least-squares line of max salary on points.
    pub slope: Decimal,
    /// Intercept of the fitted line.
    pub intercept: Decimal,
    /// Coefficient of determination of the fit; 1 when the job set has no
    /// salary variance.
    pub r_squared: Decimal,
    /// Lowest point score among regression-eligible jobs.
    pub min_points: u32,
    /// Highest point score among regression-eligible jobs.
    pub max_points: u32,
    /// The fitted line evaluated at `min_points`.
    pub min_predicted_pay: Decimal,
    /// The fitted line evaluated at `max_points`.
    pub max_predicted_pay: Decimal,
}

impl RegressionResult {
    /// Returns the all-zero result used when no job is regression-eligible.
    ///
    /// Eligible jobs always have a point score above zero, so a zero
    /// `max_points` identifies an empty fit.
    pub fn empty() -> Self {
        Self {
            slope: Decimal::ZERO,
            intercept: Decimal::ZERO,
            r_squared: Decimal::ZERO,
            min_points: 0,
            max_points: 0,
            min_predicted_pay: Decimal::ZERO,
            max_predicted_pay: Decimal::ZERO,
        }
    }

    /// Returns true if no job participated in the fit.
    pub fn is_empty(&self) -> bool {
        self.max_points == 0
    }
}

/// A job record together with the values derived for it by the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedJob {
    /// The original job record.
    pub job: JobRecord,
    /// The salary the class should earn according to the fitted line,
    /// evaluated at the class's point score.
    pub predicted_pay: Decimal,
    /// Actual maximum salary minus predicted pay; positive means paid above
    /// evaluated worth, negative below.
    pub pay_difference: Decimal,
    /// Gender dominance classification of the class.
    pub dominance: GenderDominance,
}
