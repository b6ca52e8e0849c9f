//! Core data structures for salary estimation
//!
//! This module contains the records, queries and recommendation bundles
//! shared by the predictor, the advice engine and the command layer.

use serde::{Deserialize, Serialize};

/// Gender choices offered by the form
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Education level choices offered by the form
pub const EDUCATION_OPTIONS: [&str; 5] = [
    "B.E in Artificial Intelligence and Data Science",
    "Bachelor's",
    "Master's",
    "Ph.D",
    "Other",
];

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 70;
pub const DEFAULT_AGE: u32 = 30;

pub const MIN_EXPERIENCE: u32 = 0;
pub const MAX_EXPERIENCE: u32 = 50;
pub const DEFAULT_EXPERIENCE: u32 = 2;

/// One row of the reference dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Not used for ranking; may be absent in the source data
    pub age: Option<f64>,
    pub years_experience: f64,
    pub gender: Option<String>,
    pub education_level: String,
    pub job_title: String,
    pub salary: f64,
}

/// The attributes submitted for a single estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryInput {
    pub age: u32,
    pub years_experience: u32,
    pub gender: String,
    pub education_level: String,
    pub job_title: String,
}

/// A job title whose peers earn more than the estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetterRole {
    pub job_title: String,
    pub average_salary: f64,
}

/// Salary range bucket that drives generic tip selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bracket {
    Early,
    Mid,
    Senior,
}

/// Everything shown to the user after a successful estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub predicted_salary: f64,
    pub better_roles: Vec<BetterRole>,
    pub already_top_tier: bool,
    pub bracket: Bracket,
    pub tips: Vec<String>,
    pub courses: Vec<String>,
}

impl HistoricalRecord {
    /// True when the record shares the education level and sits within
    /// `window` years of the requested experience, both ends inclusive.
    pub fn is_similar_to(&self, query: &QueryInput, window: u32) -> bool {
        let experience = f64::from(query.years_experience);
        let window = f64::from(window);

        self.education_level == query.education_level
            && self.years_experience >= experience - window
            && self.years_experience <= experience + window
    }
}

impl QueryInput {
    pub fn new(
        age: u32,
        years_experience: u32,
        gender: impl Into<String>,
        education_level: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Self {
        Self {
            age,
            years_experience,
            gender: gender.into(),
            education_level: education_level.into(),
            job_title: job_title.into(),
        }
    }
}

impl Bracket {
    /// Human readable name for the bracket
    pub fn label(&self) -> &'static str {
        match self {
            Bracket::Early => "early career",
            Bracket::Mid => "mid career",
            Bracket::Senior => "senior",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(education: &str, years: f64) -> HistoricalRecord {
        HistoricalRecord {
            age: Some(30.0),
            years_experience: years,
            gender: Some("Male".to_string()),
            education_level: education.to_string(),
            job_title: "Data Analyst".to_string(),
            salary: 400000.0,
        }
    }

    #[test]
    fn test_similarity_window_is_inclusive() {
        let query = QueryInput::new(30, 5, "Male", "Master's", "Data Analyst");

        assert!(record("Master's", 3.0).is_similar_to(&query, 2));
        assert!(record("Master's", 7.0).is_similar_to(&query, 2));
        assert!(!record("Master's", 2.5).is_similar_to(&query, 2));
        assert!(!record("Master's", 7.5).is_similar_to(&query, 2));
    }

    #[test]
    fn test_similarity_requires_same_education() {
        let query = QueryInput::new(30, 5, "Male", "Master's", "Data Analyst");
        assert!(!record("Bachelor's", 5.0).is_similar_to(&query, 2));
    }

    #[test]
    fn test_similarity_window_below_zero_experience() {
        let query = QueryInput::new(22, 0, "Female", "Bachelor's", "Data Analyst");
        assert!(record("Bachelor's", 0.0).is_similar_to(&query, 2));
        assert!(record("Bachelor's", 2.0).is_similar_to(&query, 2));
        assert!(!record("Bachelor's", 3.0).is_similar_to(&query, 2));
    }
}
