//! Persisted user settings.
//!
//! The only setting is the selected team, stored as one JSON record under a
//! fixed key. Every change is written through synchronously.

pub mod service;
pub mod store;

pub use service::{UserSettingsService, SELECTED_TEAM_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
