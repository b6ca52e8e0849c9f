//! Core trait definitions for salary estimation
//!
//! These traits mark the seams where external collaborators plug in: the
//! trained model and the source of historical records.

use crate::core::data::{HistoricalRecord, QueryInput};
use crate::utils::error::{AppResult, ModelInvocationError};

/// A trained regression model that turns a query into a salary estimate
///
/// Implementations hold their fitted parameters as immutable state; a failed
/// invocation is terminal for that query only.
pub trait SalaryPredictor {
    /// Estimate the salary for a single query
    fn predict(&self, query: &QueryInput) -> Result<f64, ModelInvocationError>;
}

/// Source of the historical records used for comparative ranking
pub trait RecordSource {
    /// Load every usable record
    fn load_records(&self) -> AppResult<Vec<HistoricalRecord>>;
}
