// Bounded Dual Queue - one category's urgent and regular tiers

use super::error::{DomainError, Result};
use super::{CategoryId, Patient, Priority};
use crate::port::{IdProvider, TimeProvider};
use serde::Serialize;
use std::collections::VecDeque;

/// Per-tier head counts of a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Occupancy {
    pub urgent: usize,
    pub regular: usize,
    pub total: usize,
}

/// Bounded two-tier FIFO for a single category.
///
/// Invariants:
/// - `urgent.len() + regular.len() <= capacity`
/// - each tier is strict FIFO: patients leave in the order they were admitted
/// - the urgent tier is always drained before the regular tier
#[derive(Debug, Clone)]
pub struct BoundedDualQueue {
    category: CategoryId,
    capacity: usize,
    urgent: VecDeque<Patient>,
    regular: VecDeque<Patient>,
}

impl BoundedDualQueue {
    pub fn new(category: CategoryId, capacity: usize) -> Self {
        Self {
            category,
            capacity,
            urgent: VecDeque::with_capacity(capacity),
            regular: VecDeque::with_capacity(capacity),
        }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Admit a new patient at the tail of its tier
    ///
    /// The name is taken as-is; emptiness checks belong to the caller.
    /// Rejects with `CapacityExceeded` without touching either tier when the
    /// combined size has reached capacity.
    ///
    /// # Arguments
    ///
    /// * `name` - Patient display name
    /// * `priority` - Target tier
    /// * `time_provider` - Source of the arrival timestamp
    /// * `id_provider` - Source of the ticket ID
    pub fn admit(
        &mut self,
        name: impl Into<String>,
        priority: Priority,
        time_provider: &dyn TimeProvider,
        id_provider: &dyn IdProvider,
    ) -> Result<&Patient> {
        if self.len() >= self.capacity {
            return Err(DomainError::CapacityExceeded {
                category: self.category,
                capacity: self.capacity,
            });
        }

        let patient = Patient::new(
            id_provider.generate_id(),
            name,
            priority,
            time_provider.now_millis(),
        );

        let tier = match priority {
            Priority::Urgent => &mut self.urgent,
            Priority::Regular => &mut self.regular,
        };
        tier.push_back(patient);

        let index = tier.len() - 1;
        Ok(&tier[index])
    }

    /// Remove and return the next patient to be served
    ///
    /// Oldest urgent patient first; the regular tier is only consulted when
    /// no urgent patient is waiting, regardless of arrival times.
    pub fn dispatch_next(&mut self) -> Result<Patient> {
        self.urgent
            .pop_front()
            .or_else(|| self.regular.pop_front())
            .ok_or(DomainError::EmptyQueue {
                category: self.category,
            })
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            urgent: self.urgent.len(),
            regular: self.regular.len(),
            total: self.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.urgent.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urgent.is_empty() && self.regular.is_empty()
    }

    /// Free slots left before admissions are rejected
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.len())
    }

    /// Read-only view for listing (urgent first, oldest first within a tier)
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(self)
    }
}

/// Borrowed, ordered view of a queue's contents.
///
/// Built without mutating the queue. `iter()` can be called any number of
/// times and always yields the same sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    category: CategoryId,
    urgent: Vec<&'a Patient>,
    regular: Vec<&'a Patient>,
}

impl<'a> Snapshot<'a> {
    fn of(queue: &'a BoundedDualQueue) -> Self {
        Self {
            category: queue.category,
            urgent: by_arrival(&queue.urgent),
            regular: by_arrival(&queue.regular),
        }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn urgent(&self) -> &[&'a Patient] {
        &self.urgent
    }

    pub fn regular(&self) -> &[&'a Patient] {
        &self.regular
    }

    pub fn len(&self) -> usize {
        self.urgent.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urgent.is_empty() && self.regular.is_empty()
    }

    /// Urgent tier, then regular tier
    pub fn iter(&self) -> SnapshotIter<'_, 'a> {
        self.urgent.iter().chain(self.regular.iter()).copied()
    }
}

pub type SnapshotIter<'s, 'a> = std::iter::Copied<
    std::iter::Chain<std::slice::Iter<'s, &'a Patient>, std::slice::Iter<'s, &'a Patient>>,
>;

impl<'s, 'a> IntoIterator for &'s Snapshot<'a> {
    type Item = &'a Patient;
    type IntoIter = SnapshotIter<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Stable sort: equal timestamps keep admission order
fn by_arrival(tier: &VecDeque<Patient>) -> Vec<&Patient> {
    let mut patients: Vec<&Patient> = tier.iter().collect();
    patients.sort_by_key(|p| p.arrived_at());
    patients
}
