use chrono::{DateTime, FixedOffset, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{Error, ReservationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReservationWindow {
    pub fn new(
        start: impl Into<DateTime<Utc>>,
        end: impl Into<DateTime<Utc>>,
    ) -> Result<Self, Error> {
        let window = Self {
            start: start.into(),
            end: end.into(),
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.start >= self.end {
            return Err(Error::InvalidTime);
        }
        Ok(())
    }
}

/// A reservation as read from the reservation store. Only `status` and
/// `window.end` take part in the transition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct Reservation {
    #[builder(default)]
    pub id: String,
    pub user_id: String,
    pub resource_id: String,
    #[builder(default = "ReservationStatus::RequiresHandling")]
    pub status: ReservationStatus,
    pub window: ReservationWindow,
    #[builder(default)]
    pub note: String,
}

impl Reservation {
    pub fn new(
        uid: impl Into<String>,
        rid: impl Into<String>,
        status: ReservationStatus,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            user_id: uid.into(),
            resource_id: rid.into(),
            status,
            window: ReservationWindow {
                start: start.with_timezone(&Utc),
                end: end.with_timezone(&Utc),
            },
            note: note.into(),
        }
    }

    pub fn new_requires_handling(
        uid: impl Into<String>,
        rid: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        note: impl Into<String>,
    ) -> Self {
        Self::new(uid, rid, ReservationStatus::RequiresHandling, start, end, note)
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.window.end
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.user_id.is_empty() {
            return Err(Error::InvalidUserId(self.user_id.clone()));
        }
        if self.resource_id.is_empty() {
            return Err(Error::InvalidResourceId(self.resource_id.clone()));
        }
        self.window.validate()
    }
}
