//! Wall-clock time parsing and local timestamp construction.

use chrono::{DateTime, NaiveDate, NaiveTime, Offset, SecondsFormat, TimeDelta, TimeZone, Utc};

/// Parse a browser time input value ("HH:MM", optionally "HH:MM:SS").
///
/// Hours may be one or two digits, minutes and seconds exactly two.
/// Seconds are accepted but dropped.
pub fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    let mut parts = input.trim().split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    let seconds = parts.next();
    if parts.next().is_some() {
        return None;
    }

    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if let Some(seconds) = seconds {
        if seconds.len() != 2 || parse_digits(seconds)? > 59 {
            return None;
        }
    }

    NaiveTime::from_hms_opt(parse_digits(hours)?, parse_digits(minutes)?, 0)
}

fn parse_digits(s: &str) -> Option<u32> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Place a time of day on a calendar day in `tz`.
///
/// A local time skipped by a forward transition keeps the offset in force
/// before it, landing past the gap (02:30 becomes 03:30 on a one-hour
/// spring-forward). An ambiguous local time resolves to the earlier instant.
pub fn combine_local<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    time: NaiveTime,
) -> Option<DateTime<Utc>> {
    let naive = date.and_time(time);
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Some(dt.with_timezone(&Utc));
    }

    // Walk back in quarter hours to the last local time before the gap
    let offset = (1..=GAP_SEARCH_STEPS).find_map(|step| {
        let earlier = naive - TimeDelta::try_minutes(15 * step)?;
        tz.from_local_datetime(&earlier)
            .earliest()
            .map(|dt| dt.offset().fix())
    })?;
    let utc = naive - TimeDelta::try_seconds(i64::from(offset.local_minus_utc()))?;
    Some(Utc.from_utc_datetime(&utc))
}

/// One day of quarter hours.
const GAP_SEARCH_STEPS: i64 = 96;

/// Format a timestamp the way `Date.toISOString()` does: UTC, milliseconds, `Z`.
pub fn to_iso_string(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
