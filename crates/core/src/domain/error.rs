// Domain Error Types
//
// All variants are expected outcomes reported to the immediate caller.
// None of them leaves a queue partially mutated.

use super::CategoryId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid category: {category} (expected 1..={count})")]
    InvalidCategory { category: CategoryId, count: usize },

    #[error("Category {category} is at capacity ({capacity})")]
    CapacityExceeded { category: CategoryId, capacity: usize },

    #[error("No patients waiting in category {category}")]
    EmptyQueue { category: CategoryId },
}

pub type Result<T> = std::result::Result<T, DomainError>;
