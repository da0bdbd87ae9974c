use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Calendar date of `instant` as seen from `offset`.
pub fn calendar_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>, offset: FixedOffset) -> bool {
    calendar_date(a, offset) == calendar_date(b, offset)
}
