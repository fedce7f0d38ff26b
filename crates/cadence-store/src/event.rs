//! The stored event record: a rule, its expanded occurrences, and display
//! metadata.

use cadence_engine::RecurrenceRule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recurring event as persisted by a repository.
///
/// Carries the original rule alongside the materialized occurrence list so
/// the rule can be re-displayed and edited later without re-deriving its
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub rule: RecurrenceRule,
    pub occurrences: Vec<NaiveDate>,
}

impl CalendarEvent {
    /// Build a record with a fresh v4 id. An empty title falls back to
    /// `"<Frequency> Event"`.
    pub fn new(title: impl Into<String>, rule: RecurrenceRule, occurrences: Vec<NaiveDate>) -> Self {
        let title = title.into();
        let title = if title.is_empty() {
            format!("{} Event", rule.freq)
        } else {
            title
        };
        Self {
            id: Uuid::new_v4(),
            title,
            rule,
            occurrences,
        }
    }

    /// Display color for this event, as a `#RRGGBB` string.
    ///
    /// Derived from the id with FNV-1a so the same event always renders in
    /// the same color, in any process.
    pub fn display_color(&self) -> String {
        let mut hash: u32 = 0x811c_9dc5;
        for byte in self.id.as_bytes() {
            hash ^= u32::from(*byte);
            hash = hash.wrapping_mul(0x0100_0193);
        }
        let [_, r, g, b] = hash.to_be_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}
