// Registry Configuration

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Default number of categories
pub const DEFAULT_CATEGORY_COUNT: usize = 20;

/// Default per-category capacity (urgent + regular)
pub const DEFAULT_CAPACITY: usize = 5;

/// Construction parameters, fixed for the lifetime of a Registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub category_count: usize,
    pub capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            category_count: DEFAULT_CATEGORY_COUNT,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RegistryConfig {
    pub fn new(category_count: usize, capacity: usize) -> Self {
        Self {
            category_count,
            capacity,
        }
    }

    /// Both parameters must be positive
    pub fn validate(&self) -> Result<()> {
        if self.category_count == 0 {
            return Err(AppError::Config(
                "category count must be at least 1".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(AppError::Config(
                "per-category capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
