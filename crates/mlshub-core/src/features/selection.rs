//! Picking a favorite team.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::data::{DataError, Repository};
use crate::models::{Conference, StatsMap, Team};
use crate::settings::UserSettingsService;

/// Catalog split by conference for the selection screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSelection {
    pub eastern: Vec<Team>,
    pub western: Vec<Team>,
}

impl TeamSelection {
    /// Teams whose conference label is not recognized are left out.
    pub fn new(repository: &dyn Repository) -> Self {
        Self {
            eastern: repository.teams_in(Conference::Eastern),
            western: repository.teams_in(Conference::Western),
        }
    }

    pub fn teams(&self, conference: Conference) -> &[Team] {
        match conference {
            Conference::Eastern => &self.eastern,
            Conference::Western => &self.western,
        }
    }

    pub fn len(&self) -> usize {
        self.eastern.len() + self.western.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a team by numeric id or case-insensitive name.
    pub fn find(&self, query: &str) -> Option<&Team> {
        let query = query.trim();
        let by_id = query.parse::<i64>().ok();
        self.eastern
            .iter()
            .chain(self.western.iter())
            .find(|t| Some(t.id) == by_id || t.name_matches(query))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmationState {
    pub is_loading: bool,
    pub error: Option<Arc<DataError>>,
}

/// Stores the chosen team, then warms the stats snapshot.
pub struct TeamConfirmation {
    settings: Arc<UserSettingsService>,
    repository: Arc<dyn Repository>,
    state: watch::Sender<ConfirmationState>,
}

impl TeamConfirmation {
    pub fn new(settings: Arc<UserSettingsService>, repository: Arc<dyn Repository>) -> Self {
        let (state, _) = watch::channel(ConfirmationState::default());
        Self {
            settings,
            repository,
            state,
        }
    }

    pub fn state(&self) -> ConfirmationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConfirmationState> {
        self.state.subscribe()
    }

    /// The selection is kept even when the fetch fails.
    pub async fn select_team(&self, team: Team) -> Result<Arc<StatsMap>, Arc<DataError>> {
        self.state.send_replace(ConfirmationState {
            is_loading: true,
            error: None,
        });

        let team_id = team.id;
        self.settings.select_team(team);

        let result = self.repository.fetch_remote_stats().await.map_err(Arc::new);

        self.state.send_modify(|s| {
            s.is_loading = false;
            match &result {
                Ok(stats) => {
                    info!(team_id, teams = stats.len(), "Team confirmed");
                }
                Err(e) => {
                    warn!(team_id, error = %e, "Stats fetch failed after team selection");
                    s.error = Some(e.clone());
                }
            }
        });

        result
    }
}
