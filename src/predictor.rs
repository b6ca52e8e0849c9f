//! Trained salary model loaded from a JSON artifact
//!
//! The artifact is an export of a fitted pipeline: a linear regressor over
//! the numeric features and one-hot encoded categorical features.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::data::QueryInput;
use crate::core::traits::SalaryPredictor;
use crate::utils::error::{AppError, AppResult, ModelInvocationError};

pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// How the encoder treats a category it never saw while fitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCategory {
    /// Encode as an all-zero row
    #[default]
    Ignore,
    /// Reject the query
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericWeights {
    pub age: f64,
    pub years_experience: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalWeights {
    pub gender: HashMap<String, f64>,
    pub education_level: HashMap<String, f64>,
    pub job_title: HashMap<String, f64>,
}

/// Linear regression over encoded query features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSalaryModel {
    pub format_version: u32,
    pub intercept: f64,
    pub numeric: NumericWeights,
    pub categorical: CategoricalWeights,
    #[serde(default)]
    pub handle_unknown: UnknownCategory,
}

impl LinearSalaryModel {
    /// Load and validate a model artifact from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Model(format!(
                "Model artifact not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let model = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            job_titles = model.categorical.job_title.len(),
            handle_unknown = ?model.handle_unknown,
            "loaded model artifact"
        );

        Ok(model)
    }

    /// Parse and validate a model artifact
    pub fn from_json(content: &str) -> AppResult<Self> {
        let model: LinearSalaryModel = serde_json::from_str(content)
            .map_err(|e| AppError::Model(format!("Malformed model artifact: {}", e)))?;

        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(AppError::Model(format!(
                "Unsupported model format version {} (expected {})",
                self.format_version, SUPPORTED_FORMAT_VERSION
            )));
        }

        let finite = self.intercept.is_finite()
            && self.numeric.age.is_finite()
            && self.numeric.years_experience.is_finite()
            && self.categorical_features().all(|(_, weights)| weights.values().all(|w| w.is_finite()));

        if !finite {
            return Err(AppError::Model(
                "Model artifact contains non-finite coefficients".to_string(),
            ));
        }

        Ok(())
    }

    fn categorical_features(&self) -> impl Iterator<Item = (&'static str, &HashMap<String, f64>)> {
        [
            ("gender", &self.categorical.gender),
            ("education_level", &self.categorical.education_level),
            ("job_title", &self.categorical.job_title),
        ]
        .into_iter()
    }

    fn encode(
        &self,
        feature: &str,
        weights: &HashMap<String, f64>,
        value: &str,
    ) -> Result<f64, ModelInvocationError> {
        match weights.get(value) {
            Some(weight) => Ok(*weight),
            None => match self.handle_unknown {
                UnknownCategory::Ignore => {
                    tracing::debug!(feature, value, "unseen category encoded as zeros");
                    Ok(0.0)
                }
                UnknownCategory::Error => Err(ModelInvocationError::UnknownCategory {
                    feature: feature.to_string(),
                    value: value.to_string(),
                }),
            },
        }
    }
}

impl SalaryPredictor for LinearSalaryModel {
    fn predict(&self, query: &QueryInput) -> Result<f64, ModelInvocationError> {
        let mut estimate = self.intercept
            + self.numeric.age * f64::from(query.age)
            + self.numeric.years_experience * f64::from(query.years_experience);

        estimate += self.encode("gender", &self.categorical.gender, &query.gender)?;
        estimate += self.encode(
            "education_level",
            &self.categorical.education_level,
            &query.education_level,
        )?;
        estimate += self.encode("job_title", &self.categorical.job_title, &query.job_title)?;

        if !estimate.is_finite() {
            return Err(ModelInvocationError::NonFinite);
        }

        Ok(estimate)
    }
}
