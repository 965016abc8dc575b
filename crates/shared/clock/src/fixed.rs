use chrono::{DateTime, Utc};
use configgen_core::Timestamp;
use configgen_ports::Clock;

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// Parse an RFC 3339 instant, e.g. `2024-03-01T09:30:00Z`
    pub fn from_rfc3339(text: &str) -> Result<Self, chrono::ParseError> {
        let instant = DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc);
        Ok(Self::new(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
