mod service;

use reservation::{ReservationTransitionPolicy, SystemClock};

pub use service::locate_config;

/// Answers "what can staff do with this reservation right now" for a
/// presentation layer.
#[derive(Debug, Clone)]
pub struct RsvpService<C = SystemClock> {
    policy: ReservationTransitionPolicy<C>,
}
