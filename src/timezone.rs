//! Converts UTC timestamps into the server's configured local timezone for display.
use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the UTC offset of `canonical_timezone` (e.g. "Pacific/Auckland") at the current time.
///
/// Returns `None` if `canonical_timezone` is not a known timezone name.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    get_offset_at(canonical_timezone, OffsetDateTime::now_utc())
}

/// Get the calendar date of `date_time` in `canonical_timezone`.
///
/// The offset is looked up at `date_time` rather than now, so dates on either
/// side of a daylight saving change are converted correctly.
pub fn get_local_date(canonical_timezone: &str, date_time: OffsetDateTime) -> Option<Date> {
    get_offset_at(canonical_timezone, date_time).map(|offset| date_time.to_offset(offset).date())
}

fn get_offset_at(canonical_timezone: &str, date_time: OffsetDateTime) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&date_time).to_utc())
}

#[cfg(test)]
mod tests {
    use time::{UtcOffset, macros::datetime};

    use super::{get_local_date, get_local_offset};

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(get_local_offset("Etc/UTC"), Some(UtcOffset::UTC));
    }

    #[test]
    fn unknown_timezone_is_none() {
        assert_eq!(get_local_offset("Not/AZone"), None);
    }

    #[test]
    fn local_date_can_be_the_next_day() {
        let date_time = datetime!(2025-01-15 20:00 UTC);

        let date = get_local_date("Pacific/Auckland", date_time);

        assert_eq!(date, Some(time::macros::date!(2025 - 01 - 16)));
    }
}
