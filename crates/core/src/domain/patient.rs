// Patient Domain Model

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Ticket ID (UUID v4 in production)
pub type PatientId = String;

/// Priority tier. Urgent always pre-empts Regular within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Urgent,
    Regular,
}

impl Priority {
    pub fn from_urgent_flag(is_urgent: bool) -> Self {
        if is_urgent {
            Priority::Urgent
        } else {
            Priority::Regular
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::Urgent)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Urgent => write!(f, "Urgent"),
            Priority::Regular => write!(f, "Regular"),
        }
    }
}

/// A single waiting party.
///
/// Immutable once created: fields are private and only exposed through
/// accessors. The queue that admitted it owns it until dispatch, after which
/// ownership moves to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    priority: Priority,
    arrived_at: i64, // epoch ms
}

impl Patient {
    /// Create a new Patient
    ///
    /// # Arguments
    ///
    /// * `id` - Ticket ID (injected, not generated)
    /// * `name` - Display name, validated by the caller
    /// * `priority` - Tier the patient is admitted to
    /// * `arrived_at` - Arrival timestamp in epoch ms (injected, not system time)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        priority: Priority,
        arrived_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority,
            arrived_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_urgent(&self) -> bool {
        self.priority.is_urgent()
    }

    pub fn arrived_at(&self) -> i64 {
        self.arrived_at
    }

    /// Arrival time as a UTC timestamp, for rendering
    pub fn arrived_at_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.arrived_at)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
