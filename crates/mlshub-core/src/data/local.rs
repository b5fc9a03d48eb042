//! Bundled team catalog loading.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::LocalLoadError;
use crate::models::Team;

/// Resource name of the bundled catalog
pub const TEAMS_RESOURCE: &str = "teams";

/// Directory holding this crate's bundled resources
const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

#[async_trait]
pub trait LocalDataSource: Send + Sync {
    async fn load_teams(&self) -> Result<Vec<Team>, LocalLoadError>;
}

/// Loads the catalog by resource name from the first directory that has it.
#[derive(Debug, Clone)]
pub struct LocalDataService {
    search_dirs: Vec<PathBuf>,
    resource_name: String,
}

impl LocalDataService {
    /// Search the working directory's `data/` folders, then the bundled one.
    pub fn new() -> Self {
        Self {
            search_dirs: vec![
                PathBuf::from("data"),
                PathBuf::from("./data"),
                PathBuf::from("../data"),
                PathBuf::from(BUNDLED_DATA_DIR),
            ],
            resource_name: TEAMS_RESOURCE.to_string(),
        }
    }

    /// Search only the given directories, in order.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs: dirs,
            resource_name: TEAMS_RESOURCE.to_string(),
        }
    }

    /// Put a directory ahead of the default search path.
    pub fn prepend_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.insert(0, dir.into());
        self
    }

    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = name.into();
        self
    }

    fn file_name(&self) -> String {
        format!("{}.json", self.resource_name)
    }

    fn resolve(&self) -> Option<PathBuf> {
        let file_name = self.file_name();
        self.search_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    }
}

impl Default for LocalDataService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalDataSource for LocalDataService {
    async fn load_teams(&self) -> Result<Vec<Team>, LocalLoadError> {
        let path = self
            .resolve()
            .ok_or_else(|| LocalLoadError::NotFound(self.file_name()))?;

        let teams = read_teams(&path)?;
        debug!(path = %path.display(), count = teams.len(), "Loaded team catalog");
        Ok(teams)
    }
}

fn read_teams(path: &Path) -> Result<Vec<Team>, LocalLoadError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| LocalLoadError::Decode(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| LocalLoadError::Decode(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Conference;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mlshub-local-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    const THREE_TEAMS: &str = r##"[
        {"id": 1, "name": "Inter Miami", "conference": "Eastern", "logo": "InterMiami",
         "playerImage": "Messi", "colors": {"primary": "#F7B5CD", "secondary": "#231F20"},
         "stadium": "Chase Stadium"},
        {"id": 3, "name": "Atlanta United", "conference": "Eastern", "logo": "AtlantaUnited",
         "playerImage": "Almiron", "colors": {"primary": "#80000A", "secondary": "#221F1F"},
         "stadium": "Mercedes-Benz Stadium"},
        {"id": 20, "name": "LA Galaxy", "conference": "Western", "logo": "LAGalaxy",
         "playerImage": "Puig", "colors": {"primary": "#00245D", "secondary": "#FFD200"},
         "stadium": "Dignity Health Sports Park"}
    ]"##;

    #[tokio::test]
    async fn test_load_from_search_dir() {
        let dir = temp_dir();
        std::fs::write(dir.join("teams.json"), THREE_TEAMS).unwrap();

        let teams = LocalDataService::with_dirs(vec![dir.clone()])
            .load_teams()
            .await
            .expect("catalog should load");

        assert_eq!(teams.len(), 3);
        assert_eq!(teams[1].name, "Atlanta United");
        assert_eq!(teams[2].conference_kind(), Some(Conference::Western));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_first_directory_wins() {
        let first = temp_dir();
        let second = temp_dir();
        std::fs::write(first.join("teams.json"), "[]").unwrap();
        std::fs::write(second.join("teams.json"), THREE_TEAMS).unwrap();

        let teams = LocalDataService::with_dirs(vec![first.clone(), second.clone()])
            .load_teams()
            .await
            .unwrap();
        assert!(teams.is_empty());

        std::fs::remove_dir_all(first).ok();
        std::fs::remove_dir_all(second).ok();
    }

    #[tokio::test]
    async fn test_missing_resource_is_not_found() {
        let dir = temp_dir();
        let result = LocalDataService::with_dirs(vec![dir.clone()])
            .with_resource_name("missing")
            .load_teams()
            .await;

        assert_eq!(result, Err(LocalLoadError::NotFound("missing.json".to_string())));
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_malformed_resource_is_decode_error() {
        let dir = temp_dir();
        std::fs::write(dir.join("teams.json"), r#"[{"id": "one"}]"#).unwrap();

        let result = LocalDataService::with_dirs(vec![dir.clone()]).load_teams().await;
        assert!(matches!(result, Err(LocalLoadError::Decode(_))));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_bundled_catalog_loads() {
        let teams = LocalDataService::with_dirs(vec![PathBuf::from(BUNDLED_DATA_DIR)])
            .load_teams()
            .await
            .expect("bundled catalog should load");

        assert!(!teams.is_empty());
        let mut ids: Vec<i64> = teams.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), teams.len(), "team ids must be unique");
        assert!(teams.iter().all(|t| t.conference_kind().is_some()));
    }
}
