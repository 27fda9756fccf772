use chrono::{DateTime, Utc};

/// A source of the current time.
///
/// The server reads this once per commencement to stamp the new election.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    use chrono::TimeZone;

    impl FixedClock {
        /// 2023-03-01T12:00:00Z.
        pub fn example() -> Self {
            Self(Utc.timestamp_opt(1_677_672_000, 0).unwrap())
        }
    }
}
