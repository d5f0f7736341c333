//! Error types for the admission actor.

use crate::framework::FrameworkError;
use crate::model::Category;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Every capacity slot of the category is taken. Nothing was changed.
    #[error("Capacity exceeded for {category}: {limit} already in preparation")]
    CapacityExceeded { category: Category, limit: usize },

    /// The category is not served by this bar.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The admission actor is no longer running.
    #[error("Admission service unavailable: {0}")]
    ServiceUnavailable(#[from] FrameworkError),
}

impl OrderError {
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, OrderError::CapacityExceeded { .. })
    }

    /// HTTP status the collaborator answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::CapacityExceeded { .. } => 429,
            OrderError::UnknownCategory(_) => 400,
            OrderError::ServiceUnavailable(_) => 503,
        }
    }
}
