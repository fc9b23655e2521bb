use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

const ATTEMPT_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Render an attempt timestamp in the machine's local time zone.
#[must_use]
pub fn format_epoch_millis(timestamp_ms: i64) -> String {
    format_epoch_millis_in(timestamp_ms, &Local)
}

/// Render an attempt timestamp as `dd.mm.yyyy, HH:MM:SS` in `tz`.
///
/// Out-of-range timestamps fall back to the raw millisecond value.
#[must_use]
pub fn format_epoch_millis_in<Tz>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |at| {
            at.with_timezone(tz)
                .format(ATTEMPT_TIME_FORMAT)
                .to_string()
        },
    )
}
