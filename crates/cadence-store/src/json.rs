//! Durable event repository backed by a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::event::CalendarEvent;
use crate::repo::{EventPatch, EventRepository, MemoryStore};

/// Event repository persisted as pretty-printed JSON at a fixed path.
///
/// The path is the store's identity: two processes opening the same path see
/// the same event list. The whole list is rewritten on every mutation and
/// reloaded on open; a missing file reads as an empty store, and the file is
/// only created once something is written.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any events already there.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut inner = MemoryStore::new();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let events: Vec<CalendarEvent> = serde_json::from_str(&contents)?;
                for event in events {
                    inner.add_event(event)?;
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        Ok(Self { path, inner })
    }

    /// Where this store keeps its event list.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.inner.events()?)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl EventRepository for JsonFileStore {
    fn add_event(&mut self, event: CalendarEvent) -> Result<()> {
        self.inner.add_event(event)?;
        self.persist()
    }

    fn update_event(&mut self, id: Uuid, patch: EventPatch) -> Result<()> {
        self.inner.update_event(id, patch)?;
        self.persist()
    }

    fn delete_event(&mut self, id: Uuid) -> Result<()> {
        self.inner.delete_event(id)?;
        self.persist()
    }

    fn clear_events(&mut self) -> Result<()> {
        self.inner.clear_events()?;
        self.persist()
    }

    fn events(&self) -> Result<Vec<CalendarEvent>> {
        self.inner.events()
    }
}
