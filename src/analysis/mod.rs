//! Statistical analysis core of the Pay Equity Engine.
//!
//! This module contains the computational components: gender dominance
//! classification, the predicted-pay regression fit with per-job enrichment,
//! chart series derivation for the scatter display, and benefits
//! disadvantage detection. Everything here is synchronous, deterministic,
//! and free of I/O; each invocation works on its own immutable snapshot of
//! the job records.

mod benefits;
mod chart;
mod dominance;
mod regression;

pub use benefits::{
    BenefitsDisadvantageResult, COMPARABLE_VALUE_RANGE_PERCENT, DisadvantageInstance,
    comparable_value_range, detect_benefits_disadvantage,
};
pub use chart::{
    CHART_DOMAIN_MAX, CHART_DOMAIN_MIN, ChartData, ChartPoint, REGRESSION_EXTENSION_SPAN,
    build_chart_data,
};
pub use dominance::{FEMALE_DOMINANCE_THRESHOLD, MALE_DOMINANCE_THRESHOLD, classify_dominance};
pub use regression::{enrich_jobs, fit_regression, predict_pay};
