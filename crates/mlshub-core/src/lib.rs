//! MLSHub core library.
//!
//! Shared logic for picking a favorite MLS club and following its matches
//! and standings:
//!
//! - `api`: stats feed endpoint, HTTP transport, network service
//! - `models`: teams, matches, standings
//! - `data`: bundled catalog loader and the data repository
//! - `settings`: persisted team selection
//! - `features`: selection and home screen models
//! - `config`: application configuration
//! - `container`: service wiring
//! - `utils`: display formatting

pub mod api;
pub mod config;
pub mod container;
pub mod data;
pub mod features;
pub mod models;
pub mod settings;
pub mod utils;

pub use api::{NetworkError, NetworkService, StatsEndpoint};
pub use config::Config;
pub use container::AppContainer;
pub use data::{DataError, DataRepository, LocalDataService, LocalLoadError, Repository};
pub use models::{Conference, Match, Standings, StatsMap, Team, TeamColors, TeamStats};
pub use settings::{FileStore, KeyValueStore, MemoryStore, UserSettingsService};
