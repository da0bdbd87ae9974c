mod actions;
mod clock;
mod policy;

use abi::{PolicyConfig, Reservation, ReservationStatus};
use chrono::{DateTime, Utc};

pub use actions::{Action, ReservationActions};
pub use clock::{Clock, FixedClock, SystemClock};
pub use policy::{
    can_approve_at, can_deny_at, can_edit_at, can_edit_with, can_return_to_handling_at,
};

/// Decides which staff transitions a reservation currently allows.
#[derive(Debug, Clone)]
pub struct ReservationTransitionPolicy<C = SystemClock> {
    clock: C,
    config: PolicyConfig,
}

pub trait Transitions {
    /// pending and not yet ended
    fn can_approve(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool;
    /// pending, or confirmed and not yet ended
    fn can_deny(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool;
    /// denied or confirmed, and not yet ended
    fn can_return_to_handling(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool;
    /// confirmed, and ended within the grace period or on the current calendar day
    fn can_edit(&self, status: ReservationStatus, end: DateTime<Utc>) -> bool;

    /// all four checks against a single reading of the clock
    fn actions(&self, status: ReservationStatus, end: DateTime<Utc>) -> ReservationActions;

    fn actions_for(&self, rsvp: &Reservation) -> ReservationActions {
        self.actions(rsvp.status, rsvp.end())
    }
}
