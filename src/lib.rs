//! Salary Advisor - a terminal salary estimator with career advice
//!
//! This library provides the predictor, dataset and advice engine behind the
//! `salary-advisor` binary, along with the form and rendering layers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod predictor;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    advice::AdviceEngine,
    data::{BetterRole, Bracket, HistoricalRecord, QueryInput, RecommendationBundle},
    operations::AdvisorOperations,
    traits::{RecordSource, SalaryPredictor},
};
pub use predictor::LinearSalaryModel;
pub use storage::{CsvRecordSource, Dataset};
pub use utils::error::{AppError, AppResult, ModelInvocationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
