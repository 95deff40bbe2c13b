//! Pay Equity Statistical Analysis Engine
//!
//! This crate provides the statistical core of a pay-equity compliance-reporting
//! portal: gender dominance classification of job classes, a predicted-pay
//! regression over job-evaluation points, chart series derivation for the
//! scatter display, and benefits-disparity detection between comparable
//! female-exclusive and male-exclusive job classes.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod error;
pub mod models;
