//! Month parsing and month-window construction for the analytics views.

use time::{Date, Month, Time};

use crate::{Error, stores::DateWindow};

/// Parse a raw `month` query parameter into a calendar [Month].
///
/// # Errors
/// Returns [Error::InvalidMonth] when the parameter is absent, not a number,
/// or outside 1 through 12. Callers must validate the month this way before
/// touching the store.
pub(super) fn parse_month(month: Option<&str>) -> Result<Month, Error> {
    let month_number: u8 = month
        .and_then(|raw| raw.trim().parse().ok())
        .ok_or(Error::InvalidMonth)?;

    Month::try_from(month_number).map_err(|_| Error::InvalidMonth)
}

/// The half-open window `[first day of month, first day of next month)` for
/// `month` of `year`, in UTC.
pub(super) fn month_window(month: Month, year: i32) -> DateWindow {
    let next_month_year = match month {
        Month::December => year + 1,
        _ => year,
    };

    let start = Date::from_calendar_date(year, month, 1).unwrap();
    let end = Date::from_calendar_date(next_month_year, month.next(), 1).unwrap();

    DateWindow {
        start: start.with_time(Time::MIDNIGHT).assume_utc(),
        end: end.with_time(Time::MIDNIGHT).assume_utc(),
    }
}

#[cfg(test)]
mod month_tests {
    use time::{Month, macros::datetime};

    use crate::Error;

    use super::{month_window, parse_month};

    #[test]
    fn parses_months_in_range() {
        assert_eq!(parse_month(Some("1")), Ok(Month::January));
        assert_eq!(parse_month(Some("12")), Ok(Month::December));
    }

    #[test]
    fn rejects_absent_month() {
        assert_eq!(parse_month(None), Err(Error::InvalidMonth));
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert_eq!(parse_month(Some("0")), Err(Error::InvalidMonth));
        assert_eq!(parse_month(Some("13")), Err(Error::InvalidMonth));
    }

    #[test]
    fn rejects_non_numeric_month() {
        assert_eq!(parse_month(Some("march")), Err(Error::InvalidMonth));
        assert_eq!(parse_month(Some("")), Err(Error::InvalidMonth));
    }

    #[test]
    fn window_spans_one_month() {
        let window = month_window(Month::March, 2026);

        assert_eq!(window.start, datetime!(2026-03-01 0:00 UTC));
        assert_eq!(window.end, datetime!(2026-04-01 0:00 UTC));
    }

    #[test]
    fn window_wraps_year_end() {
        let window = month_window(Month::December, 2026);

        assert_eq!(window.start, datetime!(2026-12-01 0:00 UTC));
        assert_eq!(window.end, datetime!(2027-01-01 0:00 UTC));
    }
}
