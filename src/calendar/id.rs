use chrono::Utc;

/// Hands out event ids derived from the creation time in epoch milliseconds.
///
/// Two ids requested within the same millisecond would collide, so the
/// generator never returns a value at or below the previous one.
#[derive(Debug, Clone, Default)]
pub struct EventIdGenerator {
    last: i64,
}

impl EventIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    pub fn next_id_at(&mut self, now_millis: i64) -> String {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id.to_string()
    }

    /// Ensures later ids land above an id that is already in use.
    pub fn observe(&mut self, id: &str) {
        if let Ok(value) = id.parse::<i64>() {
            self.last = self.last.max(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_the_timestamp_when_clock_advances() {
        let mut ids = EventIdGenerator::new();
        assert_eq!(ids.next_id_at(1_717_236_000_000), "1717236000000");
        assert_eq!(ids.next_id_at(1_717_236_000_500), "1717236000500");
    }

    #[test]
    fn same_millisecond_is_bumped() {
        let mut ids = EventIdGenerator::new();
        let first = ids.next_id_at(1000);
        let second = ids.next_id_at(1000);
        assert_eq!(first, "1000");
        assert_eq!(second, "1001");
    }

    #[test]
    fn clock_going_backwards_still_increases() {
        let mut ids = EventIdGenerator::new();
        ids.next_id_at(5000);
        assert_eq!(ids.next_id_at(10), "5001");
    }

    #[test]
    fn observed_numeric_ids_are_skipped() {
        let mut ids = EventIdGenerator::new();
        ids.observe("9000");
        ids.observe("sample_3");
        assert_eq!(ids.next_id_at(100), "9001");
    }

    #[test]
    fn observing_the_largest_id_does_not_overflow() {
        let mut ids = EventIdGenerator::new();
        ids.observe(&i64::MAX.to_string());
        assert_eq!(ids.next_id_at(100), i64::MAX.to_string());
    }

    #[test]
    fn wall_clock_ids_are_unique() {
        let mut ids = EventIdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
    }
}
