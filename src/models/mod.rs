//! Core data models for the Pay Equity Statistical Analysis Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis;
mod benefits;
mod job_record;

pub use analysis::{EnrichedJob, GenderDominance, RegressionResult};
pub use benefits::{BenefitsEntry, contribution_for};
pub use job_record::JobRecord;
