use crate::enums::{LeagueId, TabId};
use serde::{Deserialize, Serialize};

/// Title used for the home view and as the document title prefix.
pub const HOME_TITLE: &str = "Volleyball Database";

// ============================================================================
// Route
// ============================================================================

/// The resolved navigation target.
///
/// Two `TeamDetail` routes are the same route when league and team id match;
/// `team_name` is a display hint that travels with history payloads but is
/// not encoded in the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    Home,
    LeagueTab {
        league: LeagueId,
        tab: TabId,
    },
    TeamDetail {
        league: LeagueId,
        #[serde(default)]
        team_name: String,
        team_id: String,
    },
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Route::Home, Route::Home) => true,
            (
                Route::LeagueTab { league: a, tab: ta },
                Route::LeagueTab { league: b, tab: tb },
            ) => a == b && ta == tb,
            (
                Route::TeamDetail {
                    league: a,
                    team_id: ia,
                    ..
                },
                Route::TeamDetail {
                    league: b,
                    team_id: ib,
                    ..
                },
            ) => a == b && ia == ib,
            _ => false,
        }
    }
}

impl Eq for Route {}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl Route {
    pub fn league_tab(league: LeagueId, tab: TabId) -> Self {
        Route::LeagueTab { league, tab }
    }

    pub fn team_detail(
        league: LeagueId,
        team_name: impl Into<String>,
        team_id: impl Into<String>,
    ) -> Self {
        Route::TeamDetail {
            league,
            team_name: team_name.into(),
            team_id: team_id.into(),
        }
    }

    pub fn league(&self) -> Option<&LeagueId> {
        match self {
            Route::Home => None,
            Route::LeagueTab { league, .. } | Route::TeamDetail { league, .. } => Some(league),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Canonical path form, the inverse of [`crate::routing::parse_location`].
    ///
    /// `/`, `/pvf-pro/schedule`, `/ncaa-men/team/123`
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::LeagueTab { league, tab } => format!(
                "/{}/{}",
                urlencoding::encode(&league.slug()),
                urlencoding::encode(tab.id())
            ),
            Route::TeamDetail {
                league, team_id, ..
            } => format!(
                "/{}/team/{}",
                urlencoding::encode(&league.slug()),
                urlencoding::encode(team_id)
            ),
        }
    }

    /// Hash form pushed into the address bar (`#/pvf-pro/schedule`)
    pub fn to_hash(&self) -> String {
        format!("#{}", self.to_path())
    }

    /// Human label for the history entry and the document title
    pub fn title(&self) -> String {
        match self {
            Route::Home => HOME_TITLE.to_string(),
            Route::LeagueTab { league, tab } => format!("{} - {}", league, tab.label()),
            Route::TeamDetail {
                league,
                team_name,
                team_id,
            } => {
                let name = if team_name.trim().is_empty() {
                    placeholder_team_name(team_id)
                } else {
                    team_name.clone()
                };
                format!("{} - {}", name, league)
            }
        }
    }
}

/// Name shown for a team route whose record could not be found
pub fn placeholder_team_name(team_id: &str) -> String {
    format!("Team {}", team_id)
}

// ============================================================================
// History payload
// ============================================================================

/// Unit pushed onto the browser history stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub route: Route,
    #[serde(rename = "titleHint")]
    pub title_hint: String,
    #[serde(rename = "urlHint")]
    pub url_hint: String,
}

impl NavigationEntry {
    pub fn for_route(route: Route) -> Self {
        let title_hint = route.title();
        let url_hint = route.to_hash();
        Self {
            route,
            title_hint,
            url_hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(
            Route::league_tab(LeagueId::PvfPro, TabId::Schedule).to_path(),
            "/pvf-pro/schedule"
        );
        assert_eq!(
            Route::team_detail(LeagueId::NcaaMen, "UCLA", "123").to_hash(),
            "#/ncaa-men/team/123"
        );
        assert_eq!(
            Route::team_detail(LeagueId::Lovb, "", "Grand Rapids").to_path(),
            "/lovb/team/Grand%20Rapids"
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Home.title(), "Volleyball Database");
        assert_eq!(
            Route::league_tab(LeagueId::Lovb, TabId::Teams).title(),
            "LOVB - Teams"
        );
        assert_eq!(
            Route::team_detail(LeagueId::NcaaWomen, "Nebraska", "ncaa-women-4").title(),
            "Nebraska - NCAA Women"
        );
        assert_eq!(
            Route::team_detail(LeagueId::NcaaWomen, "", "7").title(),
            "Team 7 - NCAA Women"
        );
    }

    #[test]
    fn test_team_identity_ignores_name() {
        let a = Route::team_detail(LeagueId::PvfPro, "Vegas Thrill", "42");
        let b = Route::team_detail(LeagueId::PvfPro, "", "42");
        let c = Route::team_detail(LeagueId::PvfPro, "Vegas Thrill", "43");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_navigation_entry_serde() {
        let entry = NavigationEntry::for_route(Route::team_detail(LeagueId::PvfPro, "Fury", "9"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["route"]["view"], "team_detail");
        assert_eq!(json["route"]["league"], "PVF Pro");
        assert_eq!(json["urlHint"], "#/pvf-pro/team/9");
        let back: NavigationEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
        match back.route {
            Route::TeamDetail { team_name, .. } => assert_eq!(team_name, "Fury"),
            other => panic!("unexpected route {:?}", other),
        }
    }
}
