//! The user's favorite-team selection.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::models::Team;

/// Storage key of the persisted selection
pub const SELECTED_TEAM_KEY: &str = "selectedTeam";

/// Holds the selected team and writes every change through to storage.
pub struct UserSettingsService {
    store: Arc<dyn KeyValueStore>,
    selected: watch::Sender<Option<Team>>,
}

impl UserSettingsService {
    /// Create the service and restore any previously stored selection.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = Self::load_from_storage(store.as_ref());
        let (selected, _) = watch::channel(initial);
        Self { store, selected }
    }

    pub fn selected_team(&self) -> Option<Team> {
        self.selected.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Team>> {
        self.selected.subscribe()
    }

    pub fn select_team(&self, team: Team) {
        debug!(team_id = team.id, team = %team.name, "Team selected");
        self.update(Some(team));
    }

    pub fn clear_selected_team(&self) {
        debug!("Team selection cleared");
        self.update(None);
    }

    fn update(&self, team: Option<Team>) {
        self.selected.send_replace(team);
        self.save_to_storage();
    }

    fn save_to_storage(&self) {
        let selected = self.selected.borrow().clone();
        let encoded = selected.as_ref().map(serde_json::to_vec);

        let result = match encoded {
            Some(Ok(bytes)) => self.store.set(SELECTED_TEAM_KEY, &bytes),
            Some(Err(e)) => {
                warn!(error = %e, "Failed to encode selected team, removing stored entry");
                self.store.remove(SELECTED_TEAM_KEY)
            }
            None => self.store.remove(SELECTED_TEAM_KEY),
        };

        if let Err(e) = result {
            warn!(error = %e, "Failed to persist team selection");
        }
    }

    fn load_from_storage(store: &dyn KeyValueStore) -> Option<Team> {
        let bytes = match store.get(SELECTED_TEAM_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored team selection");
                return None;
            }
        };

        match serde_json::from_slice::<Team>(&bytes) {
            Ok(team) => {
                debug!(team_id = team.id, "Restored team selection");
                Some(team)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring undecodable team selection");
                None
            }
        }
    }
}
