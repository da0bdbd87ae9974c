use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The policy never reads the wall clock directly; production code injects
/// [`SystemClock`], tests inject a [`FixedClock`].
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always answers with the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: impl Into<DateTime<Utc>>) -> Self {
        Self {
            instant: instant.into(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_should_not_move() {
        let clock = FixedClock::new("2024-06-10T10:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2024-06-10T10:00:00+00:00");
    }

    #[test]
    fn shared_clock_should_delegate() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(
            "2024-06-10T10:00:00Z".parse::<DateTime<Utc>>().unwrap(),
        ));
        let borrowed = &clock;
        assert_eq!(borrowed.now(), clock.now());
    }

    #[test]
    fn system_clock_should_advance() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
