//! Stats for the selected team's home screen.
//!
//! `HomeModel` drives one load at a time: starting a new load aborts the
//! one it supersedes, and dropping the model aborts whatever is running.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use crate::data::{DataError, Repository};
use crate::models::{Match, Standings, Team, TeamStats};

/// Logo shown when an opponent cannot be resolved against the catalog
pub const PLACEHOLDER_LOGO: &str = "TeamPlaceholder";

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub team_stats: Option<TeamStats>,
    pub is_loading: bool,
    pub error: Option<Arc<DataError>>,
}

pub struct HomeModel {
    team: Team,
    repository: Arc<dyn Repository>,
    state: Arc<watch::Sender<HomeState>>,
    loading_task: Mutex<Option<AbortHandle>>,
}

impl HomeModel {
    pub fn new(team: Team, repository: Arc<dyn Repository>) -> Self {
        let (state, _) = watch::channel(HomeState::default());
        Self {
            team,
            repository,
            state: Arc::new(state),
            loading_task: Mutex::new(None),
        }
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn state(&self) -> HomeState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<Arc<DataError>> {
        self.state.borrow().error.clone()
    }

    pub fn team_stats(&self) -> Option<TeamStats> {
        self.state.borrow().team_stats.clone()
    }

    /// Most recent played match.
    pub fn last_match(&self) -> Option<Match> {
        self.state
            .borrow()
            .team_stats
            .as_ref()
            .and_then(|s| s.last_matches.first().cloned())
    }

    pub fn upcoming_matches(&self) -> Vec<Match> {
        self.state
            .borrow()
            .team_stats
            .as_ref()
            .map(|s| s.next_matches.clone())
            .unwrap_or_default()
    }

    pub fn standings(&self) -> Option<Standings> {
        self.state.borrow().team_stats.as_ref().map(|s| s.standings.clone())
    }

    /// Logo for a match's opponent, or the placeholder when the name does
    /// not resolve.
    pub fn opponent_logo(&self, game: &Match) -> String {
        self.repository
            .logo(&game.opponent)
            .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string())
    }

    /// Refresh the feed and pick out this team's stats.
    pub async fn load_team_stats(&self) {
        // Spawn under the lock so the stored handle is always the newest task.
        let handle = {
            let mut slot = self.loading_task.lock().unwrap_or_else(|e| e.into_inner());
            let handle = tokio::spawn(Self::run_load(
                self.team.clone(),
                self.repository.clone(),
                self.state.clone(),
            ));
            if let Some(previous) = slot.replace(handle.abort_handle()) {
                debug!(team_id = self.team.id, "Aborting superseded stats load");
                previous.abort();
            }
            handle
        };

        if let Err(e) = handle.await {
            if e.is_cancelled() {
                debug!(team_id = self.team.id, "Stats load cancelled");
            } else {
                warn!(error = %e, "Stats load task failed");
            }
        }
    }

    async fn run_load(
        team: Team,
        repository: Arc<dyn Repository>,
        state: Arc<watch::Sender<HomeState>>,
    ) {
        state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let result = repository.fetch_remote_stats().await;

        state.send_modify(|s| {
            match result {
                Ok(_) => {
                    s.team_stats = repository.stats(&team);
                    if s.team_stats.is_none() {
                        debug!(team_id = team.id, "Feed has no entry for team");
                        s.error = Some(Arc::new(DataError::NoDataAvailable));
                    }
                }
                Err(e) => {
                    warn!(team_id = team.id, error = %e, "Failed to load team stats");
                    s.error = Some(Arc::new(e));
                }
            }
            s.is_loading = false;
        });
    }
}

impl Drop for HomeModel {
    fn drop(&mut self) {
        let task = self.loading_task.get_mut().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(task) = task {
            task.abort();
        }
    }
}
