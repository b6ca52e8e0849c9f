pub mod configure;
pub mod form;
pub mod predict;
pub mod titles;

use anyhow::{Context, Result};

use crate::config::{Config, InputConfig};
use crate::core::advice::AdviceEngine;
use crate::core::data::{GENDER_OPTIONS, QueryInput};
use crate::core::operations::AdvisorOperations;
use crate::predictor::LinearSalaryModel;
use crate::storage::{CsvRecordSource, Dataset};
use crate::utils::error::{AppError, AppResult};

/// Load the model artifact and dataset named by the configuration
///
/// Either one failing to load is fatal for the whole process.
pub fn load_operations(config: &Config) -> Result<AdvisorOperations<LinearSalaryModel>> {
    let model = LinearSalaryModel::load(&config.general.model_file).with_context(|| {
        format!(
            "Failed to load model artifact {}",
            config.general.model_file.display()
        )
    })?;

    let dataset = load_dataset(config)?;

    Ok(AdvisorOperations::new(
        model,
        dataset,
        AdviceEngine::new(config.advice),
    ))
}

pub fn load_dataset(config: &Config) -> Result<Dataset> {
    Dataset::load(&CsvRecordSource::new(&config.general.data_file)).with_context(|| {
        format!(
            "Failed to load dataset {}",
            config.general.data_file.display()
        )
    })
}

/// Check the free-form fields of a query against the fixed choices
pub fn check_query(query: &QueryInput, input: &InputConfig, dataset: &Dataset) -> AppResult<()> {
    if !input.free_text_gender && !GENDER_OPTIONS.contains(&query.gender.as_str()) {
        return Err(AppError::Input(format!(
            "Gender must be one of: {}",
            GENDER_OPTIONS.join(", ")
        )));
    }

    if query.job_title.trim().is_empty() {
        return Err(AppError::Input("Job title cannot be empty".to_string()));
    }

    if !input.free_text_job_title && !dataset.has_job_title(&query.job_title) {
        return Err(AppError::Input(format!(
            "Unknown job title '{}'. Run `salary-advisor titles` to list known titles",
            query.job_title
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::HistoricalRecord;

    fn dataset() -> Dataset {
        Dataset::new(vec![HistoricalRecord {
            age: Some(29.0),
            years_experience: 3.0,
            gender: Some("Female".to_string()),
            education_level: "Bachelor's".to_string(),
            job_title: "Data Analyst".to_string(),
            salary: 350000.0,
        }])
    }

    #[test]
    fn test_check_query_fixed_choices() {
        let input = InputConfig::default();

        let ok = QueryInput::new(30, 2, "Female", "Bachelor's", "Data Analyst");
        assert!(check_query(&ok, &input, &dataset()).is_ok());

        let bad_gender = QueryInput::new(30, 2, "Robot", "Bachelor's", "Data Analyst");
        assert!(matches!(
            check_query(&bad_gender, &input, &dataset()),
            Err(AppError::Input(_))
        ));

        let bad_title = QueryInput::new(30, 2, "Male", "Bachelor's", "Astronaut");
        assert!(check_query(&bad_title, &input, &dataset()).is_err());
    }

    #[test]
    fn test_check_query_free_text_variant() {
        let input = InputConfig {
            free_text_gender: true,
            free_text_job_title: true,
        };

        let query = QueryInput::new(30, 2, "Nonbinary", "Bachelor's", "Astronaut");
        assert!(check_query(&query, &input, &dataset()).is_ok());

        let blank = QueryInput::new(30, 2, "Nonbinary", "Bachelor's", "  ");
        assert!(check_query(&blank, &input, &dataset()).is_err());
    }

    #[test]
    fn test_sample_data_end_to_end() {
        let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let mut config = Config::default();
        config.general.model_file = data_dir.join("model.json");
        config.general.data_file = data_dir.join("Salary_Data.csv");

        let operations = load_operations(&config).unwrap();
        assert_eq!(operations.dataset().len(), 22);

        let query = QueryInput::new(30, 4, "Male", "Master's", "Data Analyst");
        check_query(&query, &config.input, operations.dataset()).unwrap();

        let bundle = operations.evaluate(&query).unwrap();
        assert_eq!(bundle.predicted_salary, 628000.0);

        let titles: Vec<&str> = bundle.better_roles.iter().map(|r| r.job_title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Machine Learning Engineer", "Data Scientist", "Software Engineer"]
        );
        assert_eq!(bundle.bracket, crate::core::data::Bracket::Mid);
        assert_eq!(bundle.courses[0], "Google Data Analytics Professional Certificate");
    }

    #[test]
    fn test_load_operations_missing_model_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.general.model_file = dir.path().join("model.json");
        config.general.data_file = dir.path().join("Salary_Data.csv");

        let err = load_operations(&config).err().unwrap();
        assert!(format!("{:#}", err).contains("Model artifact not found"));
    }
}
