//! Chart series derivation for the pay-equity scatter display.
//!
//! This module partitions enriched jobs into plotting series by dominance
//! and derives the regression line segment plus a display-clamped extension
//! of it. The extension is purely a display aid; it carries no compliance
//! meaning and must not be confused with the eligible-range predicted pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EnrichedJob, GenderDominance, RegressionResult};

use super::regression::predict_pay;

/// How far beyond each eligible extremum the regression line is extended.
pub const REGRESSION_EXTENSION_SPAN: i64 = 500;

/// Lower bound of the fixed chart display domain.
pub const CHART_DOMAIN_MIN: i64 = -340;

/// Upper bound of the fixed chart display domain.
pub const CHART_DOMAIN_MAX: i64 = 2720;

/// One plotted point.
///
/// The x axis carries job-evaluation points and is signed because the
/// extension segment may reach below zero; the y axis carries monthly
/// salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Job-evaluation point score.
    pub x: i64,
    /// Monthly salary amount.
    pub y: Decimal,
}

/// The plotting series and line segments for one report's scatter chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Scatter points of male-dominated classes.
    pub male_series: Vec<ChartPoint>,
    /// Scatter points of female-dominated classes.
    pub female_series: Vec<ChartPoint>,
    /// Scatter points of balanced classes.
    pub balanced_series: Vec<ChartPoint>,
    /// The fitted line between the eligible point extrema.
    pub regression_segment: [ChartPoint; 2],
    /// The fitted line extended beyond each extremum and clamped to the
    /// display domain.
    pub extension_segment: [ChartPoint; 2],
}

/// Builds the chart series for a set of enriched jobs and their fit.
///
/// Each job is plotted at its point score and maximum salary in the series
/// matching its dominance. The regression segment runs between the eligible
/// extrema; the extension segment stretches the line
/// [`REGRESSION_EXTENSION_SPAN`] points past each extremum, clamped to
/// [`CHART_DOMAIN_MIN`]..=[`CHART_DOMAIN_MAX`]. An empty fit yields
/// zero-length segments at the origin.
///
/// # Examples
///
/// ```
/// use equity_engine::analysis::{build_chart_data, fit_regression, enrich_jobs};
/// use equity_engine::models::JobRecord;
/// use rust_decimal::Decimal;
///
/// let jobs = vec![JobRecord {
///     job_number: 1,
///     title: "Custodian 1".to_string(),
///     males: 6,
///     females: 0,
///     points: 600,
///     min_salary: Decimal::ZERO,
///     max_salary: Decimal::from(2400),
/// }];
/// let regression = fit_regression(&jobs);
/// let chart = build_chart_data(&enrich_jobs(&jobs, &regression), &regression);
///
/// assert_eq!(chart.male_series.len(), 1);
/// assert_eq!(chart.extension_segment[0].x, 100);
/// assert_eq!(chart.extension_segment[1].x, 1100);
/// ```
pub fn build_chart_data(enriched: &[EnrichedJob], regression: &RegressionResult) -> ChartData {
    let mut male_series = Vec::new();
    let mut female_series = Vec::new();
    let mut balanced_series = Vec::new();

    for entry in enriched {
        let point = ChartPoint {
            x: i64::from(entry.job.points),
            y: entry.job.max_salary,
        };
        match entry.dominance {
            GenderDominance::Male => male_series.push(point),
            GenderDominance::Female => female_series.push(point),
            GenderDominance::Balanced => balanced_series.push(point),
        }
    }

    let (regression_segment, extension_segment) = if regression.is_empty() {
        let origin = ChartPoint {
            x: 0,
            y: Decimal::ZERO,
        };
        ([origin.clone(), origin.clone()], [origin.clone(), origin])
    } else {
        let regression_segment = [
            ChartPoint {
                x: i64::from(regression.min_points),
                y: regression.min_predicted_pay,
            },
            ChartPoint {
                x: i64::from(regression.max_points),
                y: regression.max_predicted_pay,
            },
        ];

        let extended_min =
            (i64::from(regression.min_points) - REGRESSION_EXTENSION_SPAN).max(CHART_DOMAIN_MIN);
        let extended_max =
            (i64::from(regression.max_points) + REGRESSION_EXTENSION_SPAN).min(CHART_DOMAIN_MAX);
        let extension_segment = [
            ChartPoint {
                x: extended_min,
                y: predict_pay(Decimal::from(extended_min), regression),
            },
            ChartPoint {
                x: extended_max,
                y: predict_pay(Decimal::from(extended_max), regression),
            },
        ];

        (regression_segment, extension_segment)
    };

    ChartData {
        male_series,
        female_series,
        balanced_series,
        regression_segment,
        extension_segment,
    }
}
