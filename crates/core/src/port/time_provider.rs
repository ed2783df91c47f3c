// Arrival Clock Port
//
// Every admitted patient is stamped from this clock; dispatch reads it again
// to report how long the patient waited.

use chrono::{DateTime, Utc};

/// Clock interface (allows a scripted clock in tests)
pub trait TimeProvider: Send + Sync {
    /// Current time in milliseconds since epoch
    fn now_millis(&self) -> i64;

    /// Current time as a UTC timestamp
    fn now_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.now_millis())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Milliseconds elapsed since `arrived_at`
    ///
    /// Never negative and never overflows: a clock that stepped backwards
    /// reports 0, extreme values saturate.
    fn waited_millis(&self, arrived_at: i64) -> i64 {
        self.now_millis().saturating_sub(arrived_at).max(0)
    }
}

/// Wall clock (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(i64);

    impl TimeProvider for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_waited_millis() {
        assert_eq!(FixedClock(5_000).waited_millis(2_000), 3_000);
        assert_eq!(FixedClock(5_000).waited_millis(5_000), 0);
    }

    #[test]
    fn test_waited_millis_clock_stepped_back() {
        assert_eq!(FixedClock(1_000).waited_millis(4_000), 0);
    }

    #[test]
    fn test_waited_millis_saturates() {
        assert_eq!(FixedClock(i64::MAX).waited_millis(i64::MIN), i64::MAX);
        assert_eq!(FixedClock(i64::MIN).waited_millis(i64::MAX), 0);
    }

    #[test]
    fn test_now_utc_matches_millis() {
        let clock = FixedClock(1_700_000_000_123);
        assert_eq!(clock.now_utc().timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemTimeProvider;
        let before = clock.now_millis();
        assert!(clock.waited_millis(before) >= 0);
        assert!(clock.now_millis() >= before);
    }
}
