// Ticket ID Port
//
// Ticket IDs label a patient for display and log correlation only; queue
// ordering never looks at them.

use crate::domain::PatientId;

/// Ticket issuer (allows deterministic tickets in tests)
pub trait IdProvider: Send + Sync {
    /// Issue a fresh ticket ID, unique for the life of the process
    fn generate_id(&self) -> PatientId;
}

/// Random UUID v4 tickets (production)
pub struct UuidTicketProvider;

impl IdProvider for UuidTicketProvider {
    fn generate_id(&self) -> PatientId {
        uuid::Uuid::new_v4().hyphenated().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_unique_uuids() {
        let issuer = UuidTicketProvider;
        let tickets: Vec<PatientId> = (0..16).map(|_| issuer.generate_id()).collect();

        for ticket in &tickets {
            let parsed = uuid::Uuid::parse_str(ticket).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }

        let mut deduped = tickets.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tickets.len());
    }
}
