use abi::{Config, Reservation, ReservationStatus};
use chrono::{DateTime, Duration, Utc};
use reservation::FixedClock;

pub const FIXTURE_CONFIG: &str = "fixtures/config.yml";

#[derive(Debug, Clone)]
pub struct TestConfig {
    pub config: Config,
    pub now: DateTime<Utc>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            config: Config::load(FIXTURE_CONFIG).unwrap(),
            now: "2024-06-10T10:00:00Z".parse().unwrap(),
        }
    }
}

impl TestConfig {
    pub fn clock(&self) -> FixedClock {
        FixedClock::new(self.now)
    }

    /// A reservation lasting one hour and ending `ends_in` from `now`.
    pub fn reservation(&self, status: ReservationStatus, ends_in: Duration) -> Reservation {
        let end = self.now + ends_in;
        let start = end - Duration::hours(1);
        Reservation::new(
            "aliceid",
            "sauna-1",
            status,
            start.into(),
            end.into(),
            "test reservation",
        )
    }
}
