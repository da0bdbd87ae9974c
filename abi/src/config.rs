use std::{fs, path::Path};

use chrono::{Duration, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Civil UTC offsets stay within +/-18 hours.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// One year.
const MAX_EDIT_GRACE_MINUTES: i64 = 366 * 24 * 60;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Tunables for the transition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// How long after its end a confirmed reservation stays editable.
    #[serde(default = "default_edit_grace_minutes")]
    pub edit_grace_minutes: i64,
    /// Offset east of UTC used to decide which calendar day an instant falls on.
    #[serde(default)]
    pub calendar_offset_minutes: i32,
}

fn default_edit_grace_minutes() -> i64 {
    60
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            edit_grace_minutes: default_edit_grace_minutes(),
            calendar_offset_minutes: 0,
        }
    }
}

impl Config {
    pub fn load(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let config = fs::read_to_string(filename.as_ref()).map_err(|_| Error::ConfigReadError)?;
        let config: Self = serde_yaml::from_str(&config).map_err(|_| Error::ConfigParseError)?;
        config.policy.validate()?;
        Ok(config)
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(0..=MAX_EDIT_GRACE_MINUTES).contains(&self.edit_grace_minutes) {
            return Err(Error::InvalidGracePeriod(self.edit_grace_minutes));
        }
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&self.calendar_offset_minutes) {
            return Err(Error::InvalidCalendarOffset(self.calendar_offset_minutes));
        }
        Ok(())
    }

    /// `None` when the grace period does not fit in a `Duration`.
    pub fn edit_grace(&self) -> Option<Duration> {
        Duration::try_minutes(self.edit_grace_minutes)
    }

    /// Falls back to UTC if the offset is out of range; `validate` reports that case.
    pub fn calendar_offset(&self) -> FixedOffset {
        self.calendar_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}
