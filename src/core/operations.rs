//! Core operations implementation
//!
//! Wires the predictor, the historical dataset and the advice engine
//! together for one submission at a time.

use crate::core::{
    advice::AdviceEngine,
    data::{QueryInput, RecommendationBundle},
    traits::SalaryPredictor,
};
use crate::storage::Dataset;
use crate::utils::error::AppResult;

/// Request-scoped evaluation over injected, read-only collaborators
pub struct AdvisorOperations<P: SalaryPredictor> {
    predictor: P,
    dataset: Dataset,
    engine: AdviceEngine,
}

impl<P: SalaryPredictor> AdvisorOperations<P> {
    pub fn new(predictor: P, dataset: Dataset, engine: AdviceEngine) -> Self {
        Self {
            predictor,
            dataset,
            engine,
        }
    }

    /// Estimate a salary and build the advice bundle for it
    ///
    /// A prediction failure is returned to the caller; nothing is retried.
    pub fn evaluate(&self, query: &QueryInput) -> AppResult<RecommendationBundle> {
        let predicted = self.predictor.predict(query).inspect_err(|e| {
            tracing::warn!(error = %e, job_title = %query.job_title, "prediction failed");
        })?;

        tracing::info!(predicted, job_title = %query.job_title, "estimated salary");

        Ok(self.engine.recommend(predicted, query, self.dataset.records()))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::HistoricalRecord;
    use crate::utils::error::{AppError, ModelInvocationError};

    struct FixedPredictor(f64);

    impl SalaryPredictor for FixedPredictor {
        fn predict(&self, _query: &QueryInput) -> Result<f64, ModelInvocationError> {
            Ok(self.0)
        }
    }

    struct FailingPredictor;

    impl SalaryPredictor for FailingPredictor {
        fn predict(&self, query: &QueryInput) -> Result<f64, ModelInvocationError> {
            Err(ModelInvocationError::UnknownCategory {
                feature: "gender".to_string(),
                value: query.gender.clone(),
            })
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![HistoricalRecord {
            age: Some(35.0),
            years_experience: 4.0,
            gender: Some("Female".to_string()),
            education_level: "Bachelor's".to_string(),
            job_title: "Product Manager".to_string(),
            salary: 900000.0,
        }])
    }

    #[test]
    fn test_evaluate_builds_bundle() {
        let ops = AdvisorOperations::new(FixedPredictor(450000.0), dataset(), AdviceEngine::default());
        let query = QueryInput::new(30, 3, "Male", "Bachelor's", "Web Developer");

        let bundle = ops.evaluate(&query).unwrap();
        assert_eq!(bundle.predicted_salary, 450000.0);
        assert_eq!(bundle.better_roles.len(), 1);
        assert_eq!(bundle.better_roles[0].job_title, "Product Manager");
        assert!(!bundle.already_top_tier);
        assert_eq!(bundle.courses[0], "The Web Developer Bootcamp – Colt Steele");
    }

    #[test]
    fn test_prediction_failure_is_per_request() {
        let ops = AdvisorOperations::new(FailingPredictor, dataset(), AdviceEngine::default());
        let query = QueryInput::new(30, 3, "Nonbinary", "Bachelor's", "Web Developer");

        let err = ops.evaluate(&query).unwrap_err();
        assert!(matches!(err, AppError::Prediction(_)));

        // The same operations value keeps serving later submissions
        assert!(ops.evaluate(&query).is_err());
        assert_eq!(ops.dataset().len(), 1);
    }
}
