use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Lifecycle stage of a reservation, as reported by the reservation store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Created,
    /// Submitted, waiting for a staff decision.
    RequiresHandling,
    WaitingForPayment,
    /// Approved by staff.
    Confirmed,
    /// Rejected by staff.
    Denied,
    Cancelled,
    /// Anything the store sends that we don't know about.
    #[serde(other)]
    Unknown,
}

impl ReservationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Created => "CREATED",
            ReservationStatus::RequiresHandling => "REQUIRES_HANDLING",
            ReservationStatus::WaitingForPayment => "WAITING_FOR_PAYMENT",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Denied => "DENIED",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATED" => Ok(ReservationStatus::Created),
            "REQUIRES_HANDLING" => Ok(ReservationStatus::RequiresHandling),
            "WAITING_FOR_PAYMENT" => Ok(ReservationStatus::WaitingForPayment),
            "CONFIRMED" => Ok(ReservationStatus::Confirmed),
            "DENIED" => Ok(ReservationStatus::Denied),
            "CANCELLED" => Ok(ReservationStatus::Cancelled),
            "UNKNOWN" => Ok(ReservationStatus::Unknown),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}
