//! Job record model.
//!
//! This module defines the JobRecord struct representing one job
//! classification within a pay-equity report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one job classification within a pay-equity report.
///
/// A JobRecord is immutable input to the analysis core; the core never
/// mutates it, only derives new values alongside it. Counts and salaries are
/// validated as non-negative at the API boundary before any analysis runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Display-ordering number; not guaranteed unique across reports.
    pub job_number: u32,
    /// The job classification title.
    pub title: String,
    /// Count of covered male employees in the class.
    pub males: u32,
    /// Count of covered female employees in the class.
    pub females: u32,
    /// Job-evaluation point score; 0 is valid but excluded from regression.
    pub points: u32,
    /// Minimum monthly salary for the class.
    pub min_salary: Decimal,
    /// Maximum monthly salary for the class; the value used for pay-equity
    /// comparison.
    pub max_salary: Decimal,
}

impl JobRecord {
    /// Returns the total count of covered employees in the class.
    ///
    /// # Examples
    ///
    /// ```
    /// use equity_engine::models::JobRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let job = JobRecord {
    ///     job_number: 1,
    ///     title: "Clerk Typist 2".to_string(),
    ///     males: 3,
    ///     females: 14,
    ///     points: 120,
    ///     min_salary: Decimal::new(180000, 2),
    ///     max_salary: Decimal::new(240000, 2),
    /// };
    /// assert_eq!(job.total_employees(), 17);
    /// ```
    pub fn total_employees(&self) -> u64 {
        u64::from(self.males) + u64::from(self.females)
    }

    /// Returns true if the class is staffed exclusively by women.
    ///
    /// A class with no employees on either side is not exclusive.
    pub fn is_female_exclusive(&self) -> bool {
        self.females > 0 && self.males == 0
    }

    /// Returns true if the class is staffed exclusively by men.
    ///
    /// A class with no employees on either side is not exclusive.
    pub fn is_male_exclusive(&self) -> bool {
        self.males > 0 && self.females == 0
    }

    /// Returns true if the class participates in the predicted-pay
    /// regression fit.
    ///
    /// Classes with a zero point score or a zero maximum salary are excluded
    /// from the fit but still receive a predicted pay afterward.
    pub fn is_regression_eligible(&self) -> bool {
        self.points > 0 && self.max_salary > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_job(males: u32, females: u32, points: u32, max_salary: &str) -> JobRecord {
        JobRecord {
            job_number: 1,
            title: "Clerk Typist 2".to_string(),
            males,
            females,
            points,
            min_salary: dec("1800.00"),
            max_salary: dec(max_salary),
        }
    }

    #[test]
    fn test_deserialize_job_record() {
        let json = r#"{
            "job_number": 12,
            "title": "Maintenance Worker 1",
            "males": 8,
            "females": 0,
            "points": 150,
            "min_salary": "1900.00",
            "max_salary": "2500.00"
        }"#;

        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_number, 12);
        assert_eq!(job.title, "Maintenance Worker 1");
        assert_eq!(job.males, 8);
        assert_eq!(job.females, 0);
        assert_eq!(job.points, 150);
        assert_eq!(job.min_salary, dec("1900.00"));
        assert_eq!(job.max_salary, dec("2500.00"));
    }

    #[test]
    fn test_serialize_job_record_round_trip() {
        let job = create_test_job(3, 14, 120, "2400.00");
        let json = serde_json::to_string(&job).unwrap();
        let deserialized: JobRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(job, deserialized);
    }

    #[test]
    fn test_total_employees_sums_both_counts() {
        let job = create_test_job(3, 14, 120, "2400.00");
        assert_eq!(job.total_employees(), 17);
    }

    #[test]
    fn test_total_employees_does_not_overflow() {
        let job = create_test_job(u32::MAX, u32::MAX, 120, "2400.00");
        assert_eq!(job.total_employees(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_female_exclusive_requires_no_males() {
        assert!(create_test_job(0, 5, 120, "2400.00").is_female_exclusive());
        assert!(!create_test_job(1, 5, 120, "2400.00").is_female_exclusive());
        assert!(!create_test_job(0, 0, 120, "2400.00").is_female_exclusive());
    }

    #[test]
    fn test_male_exclusive_requires_no_females() {
        assert!(create_test_job(5, 0, 120, "2400.00").is_male_exclusive());
        assert!(!create_test_job(5, 1, 120, "2400.00").is_male_exclusive());
        assert!(!create_test_job(0, 0, 120, "2400.00").is_male_exclusive());
    }

    #[test]
    fn test_regression_eligible_requires_points_and_salary() {
        assert!(create_test_job(3, 4, 120, "2400.00").is_regression_eligible());
        assert!(!create_test_job(3, 4, 0, "2400.00").is_regression_eligible());
        assert!(!create_test_job(3, 4, 120, "0").is_regression_eligible());
        assert!(!create_test_job(3, 4, 0, "0").is_regression_eligible());
    }
}
