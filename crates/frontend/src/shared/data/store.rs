//! League data store.
//!
//! Owns the teams dataset and the readiness flag the router gate observes.
//! Provided through context; panels and the router never reach for globals.

use super::api;
use super::error::LoadError;
use crate::routes::readiness::DataReadiness;
use crate::shared::config::AppConfig;
use contracts::domain::team::{TeamRecord, TeamsByLeague};
use contracts::enums::LeagueId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Emitted once per load attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataEvent {
    Loaded { teams: usize },
    Failed(String),
}

impl DataEvent {
    pub fn from_result(result: &Result<TeamsByLeague, LoadError>) -> Self {
        match result {
            Ok(teams) => DataEvent::Loaded {
                teams: teams.values().map(Vec::len).sum(),
            },
            Err(e) => DataEvent::Failed(e.to_string()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeagueStore {
    pub teams: RwSignal<TeamsByLeague>,
    pub status: RwSignal<LoadStatus>,
    pub last_event: RwSignal<Option<DataEvent>>,
    readiness: StoredValue<DataReadiness, LocalStorage>,
}

impl LeagueStore {
    pub fn new(readiness: DataReadiness) -> Self {
        Self {
            teams: RwSignal::new(TeamsByLeague::new()),
            status: RwSignal::new(LoadStatus::Idle),
            last_event: RwSignal::new(None),
            readiness: StoredValue::new_local(readiness),
        }
    }

    pub fn readiness(&self) -> DataReadiness {
        self.readiness.get_value()
    }

    /// Fetch the teams dataset. Safe to call again after a failure.
    pub fn load(&self, config: AppConfig) {
        if self.status.get_untracked() == LoadStatus::Loading {
            return;
        }
        self.status.set(LoadStatus::Loading);

        let this = *self;
        spawn_local(async move {
            let result = api::fetch_teams(&config).await;
            this.finish(result);
        });
    }

    fn finish(&self, result: Result<TeamsByLeague, LoadError>) {
        let event = DataEvent::from_result(&result);
        match result {
            Ok(teams) => {
                leptos::logging::log!("🏐 teams loaded: {:?}", event);
                self.readiness.with_value(|r| r.observe(&teams));
                self.teams.set(teams);
                self.status.set(LoadStatus::Loaded);
            }
            Err(e) => {
                log::error!("failed to load teams: {}", e);
                self.status.set(LoadStatus::Failed(e.to_string()));
            }
        }
        self.last_event.set(Some(event));
    }

    /// Snapshot of the dataset, for code outside the reactive graph
    pub fn teams_snapshot(&self) -> TeamsByLeague {
        self.teams.get_untracked()
    }

    pub fn league_teams(&self, league: &LeagueId) -> Vec<TeamRecord> {
        self.teams
            .with(|teams| teams.get(league).cloned().unwrap_or_default())
    }
}
