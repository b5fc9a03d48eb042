//! Data access: the bundled team catalog merged with remote stats.
//!
//! - `LocalDataService`: loads `teams.json` once at startup
//! - `DataRepository`: owns the catalog and the stats snapshot, guards the
//!   remote fetch so only one runs at a time
//! - `DataError`: the error taxonomy handed to the presentation layer

pub mod error;
pub mod local;
pub mod repository;

pub use error::{DataError, LocalLoadError};
pub use local::{LocalDataService, LocalDataSource, TEAMS_RESOURCE};
pub use repository::{DataRepository, Repository};
