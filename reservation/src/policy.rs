use abi::{PolicyConfig, ReservationStatus};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{Clock, ReservationActions, ReservationTransitionPolicy, SystemClock, Transitions};

/// Only reservations waiting for a decision can be approved, and only
/// before they have ended.
pub fn can_approve_at(status: ReservationStatus, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match status {
        ReservationStatus::RequiresHandling => end > now,
        _ => false,
    }
}

/// Pending reservations can always be denied; confirmed ones only while
/// they are still upcoming.
pub fn can_deny_at(status: ReservationStatus, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match status {
        ReservationStatus::RequiresHandling => true,
        ReservationStatus::Confirmed => end > now,
        _ => false,
    }
}

pub fn can_return_to_handling_at(
    status: ReservationStatus,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    match status {
        ReservationStatus::Denied | ReservationStatus::Confirmed => end > now,
        _ => false,
    }
}

/// Edit check with the default grace period (one hour) and UTC calendar days.
pub fn can_edit_at(status: ReservationStatus, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    can_edit_with(status, end, now, &PolicyConfig::default())
}

/// A confirmed reservation stays editable until the grace period after its
/// end has passed, or until the calendar day it ended on is over, whichever
/// comes later.
pub fn can_edit_with(
    status: ReservationStatus,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &PolicyConfig,
) -> bool {
    match status {
        ReservationStatus::Confirmed => {
            // a cutoff before the earliest representable instant admits every end
            let within_grace = config
                .edit_grace()
                .and_then(|grace| now.checked_sub_signed(grace))
                .map_or(true, |cutoff| end > cutoff);
            within_grace || abi::same_calendar_day(end, now, config.calendar_offset())
        }
        _ => false,
    }
}

impl ReservationTransitionPolicy<SystemClock> {
    pub fn new(config: PolicyConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ReservationTransitionPolicy<C> {
    pub fn with_clock(config: PolicyConfig, clock: C) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Evaluate all four rules against a caller-supplied instant.
    pub fn actions_at(
        &self,
        status: ReservationStatus,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> ReservationActions {
        if status == ReservationStatus::Unknown {
            warn!(%end, "reservation with unknown status is not actionable");
        }
        let actions = ReservationActions::evaluate(status, end, now, &self.config);
        debug!(%status, %end, %now, ?actions, "evaluated reservation actions");
        actions
    }
}

impl<C: Clock> Transitions for ReservationTransitionPolicy<C> {
    fn can_approve(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool {
        can_approve_at(status, end, self.clock.now())
    }

    fn can_deny(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool {
        can_deny_at(status, end, self.clock.now())
    }

    fn can_return_to_handling(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool {
        can_return_to_handling_at(status, end, self.clock.now())
    }

    fn can_edit(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool {
        can_edit_with(status, end, self.clock.now(), &self.config)
    }

    fn actions(&self, status: ReservationStatus, end: DateTime<Utc>) -> ReservationActions {
        self.actions_at(status, end, self.clock.now())
    }
}
