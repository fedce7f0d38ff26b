//! Month-level date helpers: day counts, day-of-month resolution, and
//! nth-weekday lookup.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::rule::DayOverflow;

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // 28 is valid in every month, so probing downward from 31 finds the
    // last day without spelling out month lengths by hand.
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(28)
}

/// Resolve `day` within the month containing `cursor`, under the given
/// overflow policy.
///
/// Days below 1 are raised to 1. Under [`DayOverflow::Clamp`] a day past
/// the end of the month snaps to the last valid day; under
/// [`DayOverflow::Rollover`] it counts onward from the first of the month,
/// spilling into the following month. `None` only when the result would
/// leave the calendar's representable range.
pub fn resolve_month_day(cursor: NaiveDate, day: u32, overflow: DayOverflow) -> Option<NaiveDate> {
    let day = day.max(1);
    match overflow {
        DayOverflow::Clamp => {
            let last = days_in_month(cursor.year(), cursor.month());
            cursor.with_day(day.min(last))
        }
        DayOverflow::Rollover => cursor
            .with_day(1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(day - 1)))),
    }
}

/// Date of the `nth` occurrence of `weekday` within `cursor`'s month.
///
/// Scans days 1..=31 in ascending order, stopping once the day number no
/// longer falls inside the month, and returns the date where the running
/// match count reaches `nth`. Indices 1..=4 always resolve; a 5th
/// occurrence exists only in months long enough to hold one.
pub fn nth_weekday_of_month(cursor: NaiveDate, nth: u8, weekday: Weekday) -> Option<NaiveDate> {
    let mut seen = 0u8;
    for day in 1..=31 {
        let date = match NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day) {
            Some(date) => date,
            None => break,
        };
        if date.weekday() == weekday {
            seen += 1;
            if seen == nth {
                return Some(date);
            }
        }
    }
    None
}
