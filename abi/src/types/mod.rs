mod reservation;
mod reservation_status;

pub use reservation::{Reservation, ReservationBuilder, ReservationWindow};
pub use reservation_status::ReservationStatus;
