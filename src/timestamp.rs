/*!
 * Creation timestamps localized to a civil timezone.
 *
 * Password records carry an ISO-8601 creation time with seconds precision
 * and a numeric UTC offset, rendered in Africa/Cairo unless configured otherwise.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

/// Timezone creation timestamps are recorded in
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Africa::Cairo;

// @returns: Current Cairo time, e.g. "2025-06-06T14:45:30+03:00"
pub fn now_local_iso() -> String {
    now_iso_in(DEFAULT_TIMEZONE)
}

// @returns: Current time in `tz` as ISO-8601 with seconds and offset
pub fn now_iso_in(tz: Tz) -> String {
    format_iso(Utc::now().with_timezone(&tz))
}

// @returns: ISO-8601 string with seconds precision and an explicit offset
pub fn format_iso(instant: DateTime<Tz>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}

// @parses: IANA timezone name such as "Africa/Cairo"
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.parse::<Tz>().ok()
}
