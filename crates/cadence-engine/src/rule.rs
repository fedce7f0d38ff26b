//! The recurrence rule model and its fail-fast validation.
//!
//! A [`RecurrenceRule`] is the immutable input to [`expand`](crate::expand):
//! a frequency, a step interval, inclusive date bounds, and the
//! frequency-specific constraints (weekday sets for weekly rules,
//! day-of-month or an nth-weekday selection for monthly rules).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// Upper bound of expansion when a rule carries no end date.
///
/// The sentinel keeps open-ended rules finite: the cursor strictly advances
/// every iteration, so expansion always terminates at this horizon.
pub const DEFAULT_HORIZON: NaiveDate = match NaiveDate::from_ymd_opt(2030, 12, 31) {
    Some(date) => date,
    None => panic!("sentinel horizon must be a valid date"),
};

/// How often a rule repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        f.write_str(name)
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(format!(
                "unknown frequency '{other}' (expected daily, weekly, monthly, or yearly)"
            )),
        }
    }
}

/// "The `nth` `weekday` of the month", e.g. the 2nd Tuesday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NthWeekday {
    /// 1-based occurrence index within the month (1..=5).
    pub nth: u8,
    pub weekday: Weekday,
}

/// What to do with a day-of-month that a short month cannot hold
/// (e.g. day 31 of a 30-day month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOverflow {
    /// Snap to the last valid day of the month.
    #[default]
    Clamp,
    /// Spill the excess days into the following month.
    Rollover,
}

/// A recurring-event rule: frequency, interval, bounds, and the
/// frequency-specific constraints.
///
/// For monthly rules exactly one resolution path is active: the presence of
/// `nth_weekday` selects nth-weekday resolution, otherwise `month_day` (or
/// its default, the start date's day) is used. Yearly rules always resolve
/// through `month_day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub freq: Frequency,
    /// Step size in units of `freq`. Must be at least 1.
    pub interval: u32,
    /// Inclusive lower bound of expansion.
    pub start: NaiveDate,
    /// Inclusive upper bound; `None` falls back to [`DEFAULT_HORIZON`].
    pub end: Option<NaiveDate>,
    /// Weekly only: the weekdays to emit within each interval window.
    /// Empty means interval-only stepping from the start date's weekday.
    pub weekdays: Vec<Weekday>,
    /// Monthly/yearly: the day of month to resolve (1..=31). `None` uses
    /// the day of `start`. Values outside the target month are settled by
    /// `overflow`.
    pub month_day: Option<u32>,
    /// Monthly only: overrides `month_day` with an nth-weekday selection.
    pub nth_weekday: Option<NthWeekday>,
    /// Day-of-month overflow policy for short months.
    pub overflow: DayOverflow,
}

impl RecurrenceRule {
    /// A rule repeating every period from `start`, with no end bound and no
    /// frequency-specific constraints. Adjust fields as needed.
    pub fn new(freq: Frequency, start: NaiveDate) -> Self {
        Self {
            freq,
            interval: 1,
            start,
            end: None,
            weekdays: Vec::new(),
            month_day: None,
            nth_weekday: None,
            overflow: DayOverflow::default(),
        }
    }

    /// Inclusive upper bound of expansion: the explicit end date, or the
    /// far-future sentinel when none was given.
    pub fn effective_end(&self) -> NaiveDate {
        self.end.unwrap_or(DEFAULT_HORIZON)
    }

    /// The day-of-month the monthly/yearly resolution paths use.
    pub fn resolved_month_day(&self) -> u32 {
        self.month_day.unwrap_or_else(|| self.start.day())
    }

    /// Reject an invalid rule before any expansion work happens.
    ///
    /// Checks run in a fixed order: end bound, interval, occurrence index.
    pub fn validate(&self) -> Result<()> {
        if let Some(end) = self.end {
            if end < self.start {
                return Err(RuleError::EndBeforeStart);
            }
        }
        if self.interval == 0 {
            return Err(RuleError::IntervalTooSmall);
        }
        if self.freq == Frequency::Monthly {
            if let Some(nth) = self.nth_weekday {
                if !(1..=5).contains(&nth.nth) {
                    return Err(RuleError::InvalidOccurrenceIndex(nth.nth));
                }
            }
        }
        Ok(())
    }
}
