//! Merged view over the local team catalog and the remote stats feed.
//!
//! `DataRepository` owns the team list and the current stats snapshot.
//! Both are published through `watch` channels so consumers always see the
//! latest values without polling.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{DataError, LocalDataSource};
use crate::api::{NetworkService, StatsEndpoint};
use crate::models::{Conference, StatsMap, Team, TeamStats};

/// Data access used by the feature models.
#[async_trait]
pub trait Repository: Send + Sync {
    fn all_teams(&self) -> Arc<Vec<Team>>;

    fn is_loading(&self) -> bool;

    async fn load_local_teams(&self) -> Result<(), DataError>;

    /// Fetch the stats feed and replace the snapshot.
    ///
    /// While a fetch is already in flight this returns the current snapshot
    /// immediately instead of starting another request.
    async fn fetch_remote_stats(&self) -> Result<Arc<StatsMap>, DataError>;

    fn stats(&self, team: &Team) -> Option<TeamStats>;

    /// Logo of the first catalog team whose name matches, ignoring case.
    fn logo(&self, team_name: &str) -> Option<String>;

    fn teams_in(&self, conference: Conference) -> Vec<Team> {
        self.all_teams()
            .iter()
            .filter(|t| t.conference_kind() == Some(conference))
            .cloned()
            .collect()
    }
}

pub struct DataRepository {
    local: Arc<dyn LocalDataSource>,
    network: NetworkService,
    endpoint: StatsEndpoint,
    teams: watch::Sender<Arc<Vec<Team>>>,
    stats: watch::Sender<Arc<StatsMap>>,
    loading: watch::Sender<bool>,
}

/// Clears the loading flag when dropped, whichever way the fetch ends.
struct LoadingGuard<'a> {
    flag: &'a watch::Sender<bool>,
}

impl<'a> LoadingGuard<'a> {
    /// Set the flag if it is clear. Returns `None` when a fetch is running.
    fn acquire(flag: &'a watch::Sender<bool>) -> Option<Self> {
        let acquired = flag.send_if_modified(|loading| {
            if *loading {
                false
            } else {
                *loading = true;
                true
            }
        });
        acquired.then_some(Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}

impl DataRepository {
    pub fn new(local: Arc<dyn LocalDataSource>, network: NetworkService) -> Self {
        let (teams, _) = watch::channel(Arc::new(Vec::new()));
        let (stats, _) = watch::channel(Arc::new(StatsMap::new()));
        let (loading, _) = watch::channel(false);

        Self {
            local,
            network,
            endpoint: StatsEndpoint::team_stats(),
            teams,
            stats,
            loading,
        }
    }

    pub fn with_endpoint(mut self, endpoint: StatsEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn subscribe_teams(&self) -> watch::Receiver<Arc<Vec<Team>>> {
        self.teams.subscribe()
    }

    pub fn subscribe_stats(&self) -> watch::Receiver<Arc<StatsMap>> {
        self.stats.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Current stats snapshot.
    pub fn all_teams_stats(&self) -> Arc<StatsMap> {
        self.stats.borrow().clone()
    }
}

#[async_trait]
impl Repository for DataRepository {
    fn all_teams(&self) -> Arc<Vec<Team>> {
        self.teams.borrow().clone()
    }

    fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    async fn load_local_teams(&self) -> Result<(), DataError> {
        let teams = self.local.load_teams().await?;
        info!(count = teams.len(), "Team catalog loaded");
        self.teams.send_replace(Arc::new(teams));
        Ok(())
    }

    async fn fetch_remote_stats(&self) -> Result<Arc<StatsMap>, DataError> {
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            debug!("Stats fetch already in flight, returning current snapshot");
            return Ok(self.all_teams_stats());
        };

        let stats: StatsMap = self.network.fetch(&self.endpoint).await.map_err(|e| {
            warn!(error = %e, "Stats fetch failed");
            DataError::from(e)
        })?;

        info!(teams = stats.len(), "Stats snapshot replaced");
        let stats = Arc::new(stats);
        self.stats.send_replace(stats.clone());
        Ok(stats)
    }

    fn stats(&self, team: &Team) -> Option<TeamStats> {
        self.stats.borrow().get(&team.stats_key()).cloned()
    }

    fn logo(&self, team_name: &str) -> Option<String> {
        let logo = self
            .teams
            .borrow()
            .iter()
            .find(|t| t.name_matches(team_name))
            .map(|t| t.logo.clone());
        if logo.is_none() {
            debug!(team_name, "No catalog team matches name");
        }
        logo
    }
}
