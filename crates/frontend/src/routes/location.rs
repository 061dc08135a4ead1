//! Deep-link discovery at startup.
//!
//! A route can arrive as a hash (`#/lovb/schedule`), as a plain path
//! (`/lovb/schedule`) or through the static host's 404 page, which stashes
//! the requested path in session storage or in a `?redirect=` query.

use crate::shared::config::AppConfig;
use serde::Deserialize;

pub const REDIRECT_STORAGE_KEY: &str = "redirectPath";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserLocation {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    Hash,
    Redirect,
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialLocation {
    pub source: LocationSource,
    /// Input for `parse_location`
    pub location: String,
}

#[derive(Debug, Default, Deserialize)]
struct RedirectQuery {
    redirect: Option<String>,
}

fn is_empty_location(value: &str) -> bool {
    value.trim_start_matches('#').trim_matches('/').is_empty()
}

/// Pick the location to route from. `None` means the home view.
pub fn select_initial_location(
    location: &BrowserLocation,
    session_redirect: Option<&str>,
    config: &AppConfig,
) -> Option<InitialLocation> {
    if !is_empty_location(&location.hash) {
        return Some(InitialLocation {
            source: LocationSource::Hash,
            location: location.hash.clone(),
        });
    }

    let query_redirect = serde_qs::from_str::<RedirectQuery>(location.search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.redirect);
    let redirect = session_redirect
        .map(str::to_string)
        .or(query_redirect)
        .filter(|r| !is_empty_location(r));
    if let Some(redirect) = redirect {
        return Some(InitialLocation {
            source: LocationSource::Redirect,
            location: config.strip_base_path(&redirect).to_string(),
        });
    }

    let path = config.strip_base_path(&location.pathname);
    let path = path.trim_end_matches("/index.html");
    if is_empty_location(path) {
        return None;
    }
    Some(InitialLocation {
        source: LocationSource::Path,
        location: path.to_string(),
    })
}

pub fn read_browser_location() -> BrowserLocation {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return BrowserLocation::default();
    };
    BrowserLocation {
        pathname: location.pathname().unwrap_or_default(),
        search: location.search().unwrap_or_default(),
        hash: location.hash().unwrap_or_default(),
    }
}

/// Read and clear the path stored by the 404 page.
pub fn take_session_redirect() -> Option<String> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let value = storage.get_item(REDIRECT_STORAGE_KEY).ok()??;
    let _ = storage.remove_item(REDIRECT_STORAGE_KEY);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{LeagueId, TabId};
    use contracts::routing::{parse_location, Route};

    fn loc(pathname: &str, search: &str, hash: &str) -> BrowserLocation {
        BrowserLocation {
            pathname: pathname.into(),
            search: search.into(),
            hash: hash.into(),
        }
    }

    fn route_of(selected: Option<InitialLocation>) -> Route {
        selected
            .map(|s| parse_location(&s.location))
            .unwrap_or(Route::Home)
    }

    #[test]
    fn test_plain_landing_is_home() {
        let config = AppConfig::default();
        assert_eq!(select_initial_location(&loc("/", "", ""), None, &config), None);
        assert_eq!(select_initial_location(&loc("/", "", "#/"), None, &config), None);
        assert_eq!(
            select_initial_location(&loc("/index.html", "", ""), None, &config),
            None
        );
    }

    #[test]
    fn test_path_and_hash_resolve_alike() {
        let config = AppConfig::default();
        let from_path = select_initial_location(&loc("/pvf-pro/team/42", "", ""), None, &config);
        let from_hash = select_initial_location(&loc("/", "", "#/pvf-pro/team/42"), None, &config);
        assert_eq!(from_path.as_ref().map(|s| s.source), Some(LocationSource::Path));
        assert_eq!(from_hash.as_ref().map(|s| s.source), Some(LocationSource::Hash));
        assert_eq!(route_of(from_path), route_of(from_hash));
    }

    #[test]
    fn test_hash_wins_over_path() {
        let config = AppConfig::default();
        let selected = select_initial_location(&loc("/lovb", "", "#/ncaa-men/schedule"), None, &config);
        assert_eq!(
            route_of(selected),
            Route::league_tab(LeagueId::NcaaMen, TabId::Schedule)
        );
    }

    #[test]
    fn test_redirects() {
        let mut config = AppConfig::default();
        config.base_path = "/vbdb".into();

        let stored = select_initial_location(&loc("/vbdb/", "", ""), Some("/vbdb/lovb/players"), &config);
        assert_eq!(stored.as_ref().map(|s| s.source), Some(LocationSource::Redirect));
        assert_eq!(route_of(stored), Route::league_tab(LeagueId::Lovb, TabId::Players));

        let query = select_initial_location(
            &loc("/vbdb/", "?redirect=%2Fncaa-women%2Fteam%2F7", ""),
            None,
            &config,
        );
        assert_eq!(
            route_of(query),
            Route::team_detail(LeagueId::NcaaWomen, "", "7")
        );

        let base_only = select_initial_location(&loc("/vbdb", "", ""), None, &config);
        assert_eq!(base_only, None);
    }
}
