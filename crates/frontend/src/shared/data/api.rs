use super::error::LoadError;
use crate::shared::config::AppConfig;
use contracts::domain::match_result::MatchResult;
use contracts::domain::player::PlayerRecord;
use contracts::domain::team::{decode_teams, TeamsByLeague};
use contracts::enums::LeagueId;
use contracts::shared::text::sanitize_json_literals;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn get_text(url: &str) -> Result<String, LoadError> {
    log::debug!("GET {}", url);
    let response = Request::get(url).send().await?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    Ok(response.text().await?)
}

/// Upstream dumps contain bare `NaN` values, so every body is sanitized
/// before decoding.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let body = get_text(url).await?;
    Ok(serde_json::from_str(&sanitize_json_literals(&body))?)
}

fn endpoint(url: Option<String>, what: &'static str, league: &LeagueId) -> Result<String, LoadError> {
    url.ok_or_else(|| LoadError::NoEndpoint {
        what,
        league: league.to_string(),
    })
}

/// Teams dataset, bucketed by league
pub async fn fetch_teams(config: &AppConfig) -> Result<TeamsByLeague, LoadError> {
    let body = get_text(&config.teams_url()).await?;
    Ok(decode_teams(&body)?)
}

/// All players of a league, staff rows removed
pub async fn fetch_players(config: &AppConfig, league: &LeagueId) -> Result<Vec<PlayerRecord>, LoadError> {
    let url = endpoint(config.players_url(league), "players", league)?;
    let players: Vec<PlayerRecord> = get_json(&url).await?;
    Ok(without_staff(players))
}

pub async fn fetch_team_roster(
    config: &AppConfig,
    league: &LeagueId,
    team_id: &str,
) -> Result<Vec<PlayerRecord>, LoadError> {
    let url = endpoint(config.team_players_url(league, team_id), "roster", league)?;
    let players: Vec<PlayerRecord> = get_json(&url).await?;
    Ok(without_staff(players))
}

pub async fn fetch_results(config: &AppConfig, league: &LeagueId) -> Result<Vec<MatchResult>, LoadError> {
    let url = endpoint(config.results_url(league), "results", league)?;
    get_json(&url).await
}

fn without_staff(players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    players.into_iter().filter(|p| !p.is_staff()).collect()
}
