//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a timestamp in UTC to minute precision, `YYYY-MM-DD HH:MM UTC`.
///
/// Used where output must not depend on the host timezone.
pub struct UtcMinute<'a>(pub &'a Timestamp);

impl fmt::Display for UtcMinute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} UTC", self.0.to_zoned(TimeZone::UTC).strftime("%Y-%m-%d %H:%M"))
    }
}
