use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Model error: {0}")]
    Model(String),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] ModelInvocationError),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Failure raised by a predictor while scoring a single query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelInvocationError {
    #[error("unknown category '{value}' for feature '{feature}'")]
    UnknownCategory { feature: String, value: String },

    #[error("model produced a non-finite estimate")]
    NonFinite,
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub enum FlowResult {
    Cancelled(String),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Prediction(e) => {
            println!("❌ {}", OutputStyle::error(&format!("Prediction failed: {}", e)));
        }
        AppError::Input(msg) => {
            println!("⚠️  {}", OutputStyle::warning(msg));
        }
        AppError::Model(msg) | AppError::Dataset(msg) | AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::Cancelled(msg) => {
            println!("⏹️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_error_message() {
        let err: AppError = ModelInvocationError::UnknownCategory {
            feature: "job_title".to_string(),
            value: "Astronaut".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Prediction failed: unknown category 'Astronaut' for feature 'job_title'"
        );
    }
}
