//! The repository boundary and its in-memory implementation.

use cadence_engine::RecurrenceRule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::event::CalendarEvent;

/// A partial update to a stored event. `None` fields keep their current
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub rule: Option<RecurrenceRule>,
    pub occurrences: Option<Vec<NaiveDate>>,
}

impl EventPatch {
    fn apply(self, event: &mut CalendarEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(rule) = self.rule {
            event.rule = rule;
        }
        if let Some(occurrences) = self.occurrences {
            event.occurrences = occurrences;
        }
    }
}

/// Storage boundary for event records.
///
/// Implementations own the full event list; mutations are durable by the
/// time the call returns. Patching or deleting an unknown id fails with
/// [`StoreError::NotFound`].
pub trait EventRepository {
    /// Append a new event to the store.
    fn add_event(&mut self, event: CalendarEvent) -> Result<()>;

    /// Merge a patch into the event with the given id.
    fn update_event(&mut self, id: Uuid, patch: EventPatch) -> Result<()>;

    /// Remove the event with the given id.
    fn delete_event(&mut self, id: Uuid) -> Result<()>;

    /// Remove every stored event.
    fn clear_events(&mut self) -> Result<()>;

    /// All stored events, in insertion order.
    fn events(&self) -> Result<Vec<CalendarEvent>>;
}

/// Event repository backed by process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<CalendarEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRepository for MemoryStore {
    fn add_event(&mut self, event: CalendarEvent) -> Result<()> {
        self.events.push(event);
        Ok(())
    }

    fn update_event(&mut self, id: Uuid, patch: EventPatch) -> Result<()> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply(event);
        Ok(())
    }

    fn delete_event(&mut self, id: Uuid) -> Result<()> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.events.remove(index);
        Ok(())
    }

    fn clear_events(&mut self) -> Result<()> {
        self.events.clear();
        Ok(())
    }

    fn events(&self) -> Result<Vec<CalendarEvent>> {
        Ok(self.events.clone())
    }
}
