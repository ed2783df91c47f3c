//! Registry - fixed set of category queues
//!
//! Routes admit/dispatch to the addressed category and aggregates the
//! cross-category views (listing and statistics). Category ids are 1-based
//! at the boundary and mapped to `index = id - 1` internally.

use crate::config::RegistryConfig;
use crate::domain::error::Result as DomainResult;
use crate::domain::{
    BoundedDualQueue, CategoryId, CategoryStats, DomainError, Patient, Priority, Snapshot,
};
use crate::error::Result;
use crate::port::{IdProvider, TimeProvider};
use std::sync::Arc;
use tracing::{debug, info};

/// Owns every category queue for the lifetime of the process
pub struct Registry {
    config: RegistryConfig,
    queues: Vec<BoundedDualQueue>,
    time_provider: Arc<dyn TimeProvider>,
    id_provider: Arc<dyn IdProvider>,
}

impl Registry {
    /// Create a registry with `config.category_count` empty queues
    ///
    /// # Arguments
    ///
    /// * `config` - Category count and per-category capacity (validated here)
    /// * `time_provider` - Arrival timestamps (injected for determinism)
    /// * `id_provider` - Ticket IDs (injected for determinism)
    pub fn new(
        config: RegistryConfig,
        time_provider: Arc<dyn TimeProvider>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Result<Self> {
        config.validate()?;

        let queues = (1..=config.category_count)
            .map(|category| BoundedDualQueue::new(category, config.capacity))
            .collect();

        info!(
            categories = config.category_count,
            capacity = config.capacity,
            "Registry initialized"
        );

        Ok(Self {
            config,
            queues,
            time_provider,
            id_provider,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn category_count(&self) -> usize {
        self.queues.len()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    fn index_of(&self, category: CategoryId) -> DomainResult<usize> {
        if category == 0 || category > self.queues.len() {
            return Err(DomainError::InvalidCategory {
                category,
                count: self.queues.len(),
            });
        }
        Ok(category - 1)
    }

    /// Read access to one category
    pub fn queue(&self, category: CategoryId) -> DomainResult<&BoundedDualQueue> {
        let index = self.index_of(category)?;
        Ok(&self.queues[index])
    }

    /// Admit a patient into a category
    ///
    /// Fails with `InvalidCategory` for ids outside `1..=category_count`, or
    /// `CapacityExceeded` when the category is full. Neither failure mutates
    /// any queue.
    pub fn admit(
        &mut self,
        category: CategoryId,
        name: impl Into<String>,
        priority: Priority,
    ) -> DomainResult<&Patient> {
        let index = self.index_of(category).inspect_err(|e| {
            info!(category, error = %e, "Admission rejected");
        })?;

        let queue = &mut self.queues[index];
        match queue.admit(
            name,
            priority,
            self.time_provider.as_ref(),
            self.id_provider.as_ref(),
        ) {
            Ok(patient) => {
                info!(
                    category,
                    patient_id = %patient.id(),
                    priority = %patient.priority(),
                    "Patient admitted"
                );
                Ok(patient)
            }
            Err(e) => {
                info!(category, error = %e, "Admission rejected");
                Err(e)
            }
        }
    }

    /// Remove the next patient to be served from a category
    ///
    /// `EmptyQueue` is a normal outcome ("nothing to do now"), kept distinct
    /// from `InvalidCategory`.
    pub fn dispatch_next(&mut self, category: CategoryId) -> DomainResult<Patient> {
        let index = self.index_of(category).inspect_err(|e| {
            info!(category, error = %e, "Dispatch rejected");
        })?;

        match self.queues[index].dispatch_next() {
            Ok(patient) => {
                let waited_ms = self.time_provider.waited_millis(patient.arrived_at());
                info!(
                    category,
                    patient_id = %patient.id(),
                    priority = %patient.priority(),
                    waited_ms,
                    "Patient dispatched"
                );
                Ok(patient)
            }
            Err(e) => {
                debug!(category, "No patients waiting");
                Err(e)
            }
        }
    }

    /// Snapshots of every non-empty category, ascending by id
    pub fn list_non_empty(&self) -> Vec<Snapshot<'_>> {
        self.queues
            .iter()
            .filter(|queue| !queue.is_empty())
            .map(BoundedDualQueue::snapshot)
            .collect()
    }

    /// One row per category, ascending by id, recomputed on every call
    pub fn statistics(&self) -> Vec<CategoryStats> {
        self.queues.iter().map(CategoryStats::of).collect()
    }

    /// Patients waiting across all categories
    pub fn total_waiting(&self) -> usize {
        self.queues.iter().map(BoundedDualQueue::len).sum()
    }
}
