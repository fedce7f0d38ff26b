//! # cadence-store
//!
//! Event records for expanded recurrence rules, and the repositories that
//! persist them.
//!
//! A [`CalendarEvent`] bundles a rule with the occurrence list it expanded
//! to, under a unique id. The [`EventRepository`] trait is the storage
//! boundary (add, patch, delete, bulk-clear, list); callers inject whichever
//! implementation fits: [`MemoryStore`] for tests and throwaway sessions, or
//! [`JsonFileStore`] for a durable event list that survives restarts. The
//! expansion engine itself never touches a repository.

pub mod error;
pub mod event;
pub mod json;
pub mod repo;

pub use error::StoreError;
pub use event::CalendarEvent;
pub use json::JsonFileStore;
pub use repo::{EventPatch, EventRepository, MemoryStore};
