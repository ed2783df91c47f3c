//! Shared fixtures for the integration test binaries

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use triage_core::port::{IdProvider, TimeProvider};
use triage_core::{Registry, RegistryConfig};

/// Clock advancing by a fixed step on every read
pub struct SteppingClock {
    current: AtomicI64,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            current: AtomicI64::new(start),
            step,
        }
    }
}

impl TimeProvider for SteppingClock {
    fn now_millis(&self) -> i64 {
        self.current.fetch_add(self.step, Ordering::SeqCst)
    }
}

/// Deterministic ticket IDs: test-1, test-2, ...
pub struct SequentialIds {
    counter: AtomicU64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl IdProvider for SequentialIds {
    fn generate_id(&self) -> String {
        format!("test-{}", self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

/// Registry with a stepping clock (1s per read) and sequential IDs
pub fn test_registry(category_count: usize, capacity: usize) -> Registry {
    Registry::new(
        RegistryConfig::new(category_count, capacity),
        Arc::new(SteppingClock::new(1_000, 1_000)),
        Arc::new(SequentialIds::default()),
    )
    .expect("valid test config")
}
