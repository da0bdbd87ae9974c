use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid reservation status: {0}")]
    InvalidStatus(String),

    #[error("Invalid start or end time for the reservation")]
    InvalidTime,

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Invalid resource id: {0}")]
    InvalidResourceId(String),

    #[error("Edit grace period must not be negative, got {0} minutes")]
    InvalidGracePeriod(i64),

    #[error("Calendar offset out of range: {0} minutes")]
    InvalidCalendarOffset(i32),

    #[error("Failed to read configuration file")]
    ConfigReadError,

    #[error("Failed to parse configuration file")]
    ConfigParseError,
}
