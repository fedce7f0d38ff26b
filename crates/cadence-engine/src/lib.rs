//! # cadence-engine
//!
//! Deterministic expansion of recurring-event rules into concrete calendar
//! dates.
//!
//! Given a [`RecurrenceRule`] — frequency, interval, date bounds, and the
//! frequency-specific constraints (weekday sets, day-of-month, or an
//! nth-weekday-of-month selection) — [`expand`] enumerates every date the
//! rule produces, in ascending order, within the rule's bounds. Open-ended
//! rules are capped at a far-future sentinel so expansion always
//! terminates.
//!
//! ## Modules
//!
//! - [`rule`] — the rule model and its fail-fast validation
//! - [`expander`] — rule → ordered list of occurrence dates
//! - [`month`] — day-of-month resolution and nth-weekday lookup
//! - [`error`] — error types
//!
//! ## Quick start
//!
//! ```rust
//! use cadence_engine::{expand, Frequency, RecurrenceRule};
//! use chrono::NaiveDate;
//!
//! let mut rule = RecurrenceRule::new(
//!     Frequency::Daily,
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//! );
//! rule.end = NaiveDate::from_ymd_opt(2024, 1, 5);
//!
//! let dates = expand(&rule).unwrap();
//! assert_eq!(dates.len(), 5);
//! ```

pub mod error;
pub mod expander;
pub mod month;
pub mod rule;

pub use error::RuleError;
pub use expander::expand;
pub use month::nth_weekday_of_month;
pub use rule::{DayOverflow, Frequency, NthWeekday, RecurrenceRule, DEFAULT_HORIZON};
