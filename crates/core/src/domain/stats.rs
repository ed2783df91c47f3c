// Occupancy Statistics - derived per call, never stored

use super::{BoundedDualQueue, CategoryId};
use serde::Serialize;

/// Busy threshold as an exact fraction of capacity (4/5 = 80%)
pub const BUSY_THRESHOLD_NUMERATOR: usize = 4;
pub const BUSY_THRESHOLD_DENOMINATOR: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccupancyStatus {
    Empty,
    Available,
    Busy,
    Full,
}

impl OccupancyStatus {
    /// Classify a head count against capacity
    ///
    /// Checked in order: Empty (0), Full (>= capacity), Busy (>= 80% of
    /// capacity), otherwise Available. The Busy comparison is done in
    /// integers: `total * 5 >= capacity * 4`.
    pub fn classify(total: usize, capacity: usize) -> Self {
        if total == 0 {
            OccupancyStatus::Empty
        } else if total >= capacity {
            OccupancyStatus::Full
        } else if total * BUSY_THRESHOLD_DENOMINATOR >= capacity * BUSY_THRESHOLD_NUMERATOR {
            OccupancyStatus::Busy
        } else {
            OccupancyStatus::Available
        }
    }
}

impl std::fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupancyStatus::Empty => write!(f, "Empty"),
            OccupancyStatus::Available => write!(f, "Available"),
            OccupancyStatus::Busy => write!(f, "Busy"),
            OccupancyStatus::Full => write!(f, "Full"),
        }
    }
}

/// One row of the statistics view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: CategoryId,
    pub urgent: usize,
    pub regular: usize,
    pub total: usize,
    pub capacity: usize,
    pub status: OccupancyStatus,
}

impl CategoryStats {
    pub fn of(queue: &BoundedDualQueue) -> Self {
        let occupancy = queue.occupancy();
        Self {
            category: queue.category(),
            urgent: occupancy.urgent,
            regular: occupancy.regular,
            total: occupancy.total,
            capacity: queue.capacity(),
            status: OccupancyStatus::classify(occupancy.total, queue.capacity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_capacity_five() {
        assert_eq!(OccupancyStatus::classify(0, 5), OccupancyStatus::Empty);
        assert_eq!(OccupancyStatus::classify(1, 5), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::classify(3, 5), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::classify(4, 5), OccupancyStatus::Busy);
        assert_eq!(OccupancyStatus::classify(5, 5), OccupancyStatus::Full);
    }

    #[test]
    fn test_classify_non_multiple_of_five() {
        // 80% of 7 is 5.6, so 6 is the first busy count
        assert_eq!(OccupancyStatus::classify(5, 7), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::classify(6, 7), OccupancyStatus::Busy);

        // 80% of 10 is exactly 8
        assert_eq!(OccupancyStatus::classify(7, 10), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::classify(8, 10), OccupancyStatus::Busy);

        // Small capacities jump straight from Available to Full
        assert_eq!(OccupancyStatus::classify(1, 2), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::classify(1, 1), OccupancyStatus::Full);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OccupancyStatus::Busy.to_string(), "Busy");
        assert_eq!(
            serde_json::to_value(OccupancyStatus::Available).unwrap(),
            "AVAILABLE"
        );
    }
}
