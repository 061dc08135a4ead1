//! Build-time configuration.
//!
//! Defaults point at the public data sources. `VBDB_DATA_BASE_URL`,
//! `VBDB_API_BASE_URL` and `VBDB_BASE_PATH` override them at compile time.

use crate::routes::panel::EXIT_ANIMATION_MS;
use crate::routes::readiness::{DEFAULT_MAX_WAIT_MS, DEFAULT_POLL_INTERVAL_MS};
use contracts::enums::LeagueId;

const DEFAULT_DATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/Tyler-widd/vbdb-data/refs/heads/master/data";
const DEFAULT_API_BASE_URL: &str = "https://api.volleyballdatabased.com";

pub const TEAMS_PAGE_SIZE: usize = 12;
pub const PLAYERS_PAGE_SIZE: usize = 10;
pub const PLAYERS_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_base_url: String,
    pub api_base_url: String,
    /// Prefix the site is served under, without trailing slash
    pub base_path: String,
    pub max_wait_ms: u32,
    pub poll_interval_ms: u32,
    pub exit_animation_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_base_url: DEFAULT_DATA_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            base_path: String::new(),
            max_wait_ms: DEFAULT_MAX_WAIT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            exit_animation_ms: EXIT_ANIMATION_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_base_url: option_env!("VBDB_DATA_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.data_base_url),
            api_base_url: option_env!("VBDB_API_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            base_path: option_env!("VBDB_BASE_PATH")
                .map(|p| p.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_path),
            ..defaults
        }
    }

    pub fn teams_url(&self) -> String {
        format!("{}/vbdb_teams.json", self.data_base_url.trim_end_matches('/'))
    }

    pub fn players_url(&self, league: &LeagueId) -> Option<String> {
        league
            .api_prefix()
            .map(|prefix| format!("{}/api/{}_players", self.api(), prefix))
    }

    pub fn team_players_url(&self, league: &LeagueId, team_id: &str) -> Option<String> {
        self.players_url(league)
            .map(|base| format!("{}/{}", base, urlencoding::encode(team_id)))
    }

    pub fn results_url(&self, league: &LeagueId) -> Option<String> {
        if !league.has_results() {
            return None;
        }
        league
            .api_prefix()
            .map(|prefix| format!("{}/api/{}_results", self.api(), prefix))
    }

    /// Pathname with the base path removed
    pub fn strip_base_path<'a>(&self, pathname: &'a str) -> &'a str {
        if self.base_path.is_empty() {
            return pathname;
        }
        pathname
            .strip_prefix(self.base_path.as_str())
            .unwrap_or(pathname)
    }

    fn api(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
