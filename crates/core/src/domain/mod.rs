// Domain Layer - Pure business logic and entities

pub mod error;
pub mod patient;
pub mod queue;
pub mod stats;

/// Category identifier (1-based, as presented to callers)
pub type CategoryId = usize;

// Re-exports
pub use error::DomainError;
pub use patient::{Patient, PatientId, Priority};
pub use queue::{BoundedDualQueue, Occupancy, Snapshot};
pub use stats::{CategoryStats, OccupancyStatus};
