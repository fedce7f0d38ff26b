//! Recurrence expansion -- converts a rule into the concrete calendar dates
//! it produces.
//!
//! A cursor starts at the rule's start date and advances by one
//! frequency-sized step per iteration, emitting zero or more occurrences
//! each step. The loop ends once the cursor passes the effective end bound
//! (the explicit end date, or the far-future sentinel for open-ended
//! rules).

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::Result;
use crate::month::{nth_weekday_of_month, resolve_month_day};
use crate::rule::{Frequency, RecurrenceRule};

/// Expand a recurrence rule into every date it produces.
///
/// The result is strictly ascending with no duplicates, and every date lies
/// in `[rule.start, rule.effective_end()]`. Expansion is a pure function of
/// the rule: no I/O, no hidden state, safe to call repeatedly.
///
/// # Errors
///
/// Returns the first [`RuleError`](crate::error::RuleError) reported by
/// [`RecurrenceRule::validate`]. Validation runs before any expansion work,
/// so an error is never accompanied by partial output.
pub fn expand(rule: &RecurrenceRule) -> Result<Vec<NaiveDate>> {
    rule.validate()?;

    let bound = rule.effective_end();
    let mut dates = Vec::new();
    let mut cursor = rule.start;

    while cursor <= bound {
        match rule.freq {
            Frequency::Daily => {
                dates.push(cursor);
                cursor = match cursor.checked_add_days(Days::new(u64::from(rule.interval))) {
                    Some(next) => next,
                    None => break,
                };
            }
            Frequency::Weekly if !rule.weekdays.is_empty() => {
                // Scan every day of the interval-week window in ascending
                // order, keeping the days whose weekday is selected.
                let window_days = u64::from(rule.interval) * 7;
                let window_end = match cursor.checked_add_days(Days::new(window_days)) {
                    Some(next) => next,
                    None => break,
                };
                let mut day = cursor;
                while day < window_end && day <= bound {
                    if rule.weekdays.contains(&day.weekday()) {
                        dates.push(day);
                    }
                    day = match day.succ_opt() {
                        Some(next) => next,
                        None => break,
                    };
                }
                cursor = window_end;
            }
            Frequency::Weekly => {
                dates.push(cursor);
                cursor = match cursor.checked_add_days(Days::new(u64::from(rule.interval) * 7)) {
                    Some(next) => next,
                    None => break,
                };
            }
            Frequency::Monthly => {
                let resolved = match rule.nth_weekday {
                    Some(nth) => nth_weekday_of_month(cursor, nth.nth, nth.weekday),
                    None => resolve_month_day(cursor, rule.resolved_month_day(), rule.overflow),
                };
                if let Some(date) = resolved {
                    if date >= rule.start && date <= bound {
                        dates.push(date);
                    }
                }
                // Advance from the original cursor, not the resolved date.
                cursor = match cursor.checked_add_months(Months::new(rule.interval)) {
                    Some(next) => next,
                    None => break,
                };
            }
            Frequency::Yearly => {
                let resolved = resolve_month_day(cursor, rule.resolved_month_day(), rule.overflow);
                if let Some(date) = resolved {
                    if date >= rule.start && date <= bound {
                        dates.push(date);
                    }
                }
                let months = rule.interval.saturating_mul(12);
                cursor = match cursor.checked_add_months(Months::new(months)) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    Ok(dates)
}
