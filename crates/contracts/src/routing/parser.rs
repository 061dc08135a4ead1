use super::route::Route;
use crate::enums::{LeagueId, TabId, DEFAULT_TAB};

/// Literal segment marking a team detail route (`<league>/team/<id>`)
const TEAM_SEGMENT: &str = "team";

/// Convert a raw location into a [`Route`].
///
/// Accepts a URL path (`/lovb/teams`), a hash fragment (`#/lovb/teams`) or a
/// bare path (`lovb/teams`). Anything that cannot be interpreted resolves to
/// `Home`; unknown league or tab tokens are preserved for downstream lookups
/// to fail gracefully. Never panics.
pub fn parse_location(location: &str) -> Route {
    let segments = split_segments(location);
    let segments = match segments.iter().position(|s| !is_blank_league(s)) {
        Some(start) => &segments[start..],
        None => return Route::Home,
    };

    let league = LeagueId::from_token(&segments[0]);

    match (segments.get(1), segments.get(2)) {
        (Some(marker), Some(team_id)) if marker.as_str() == TEAM_SEGMENT => Route::TeamDetail {
            league,
            team_name: String::new(),
            team_id: team_id.clone(),
        },
        (Some(tab), _) => Route::LeagueTab {
            league,
            tab: TabId::from_id(tab),
        },
        (None, _) => Route::LeagueTab {
            league,
            tab: DEFAULT_TAB,
        },
    }
}

/// A league token made only of dashes and whitespace names nothing and is
/// skipped (`/---/players` reads as `/players`).
fn is_blank_league(token: &str) -> bool {
    token.chars().all(|c| c == '-' || c.is_whitespace())
}

/// Strip `#`, the query string and leading slashes, then split on `/`.
/// Segments are percent-decoded first; blank ones are dropped.
fn split_segments(location: &str) -> Vec<String> {
    let trimmed = location.trim();
    let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let path = without_hash
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(without_hash);

    path.split('/')
        .map(|segment| {
            urlencoding::decode(segment)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| segment.to_string())
        })
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_variants() {
        for raw in ["", "/", "#/", "#", "//", "  ", "/?redirect=x"] {
            assert_eq!(parse_location(raw), Route::Home, "input {:?}", raw);
        }
    }

    #[test]
    fn test_canonicalization() {
        for raw in ["pvf-pro", "PVF-PRO", "pvf pro", "/pvf-pro", "#/Pvf-Pro/"] {
            assert_eq!(
                parse_location(raw).league(),
                Some(&LeagueId::PvfPro),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_default_tab() {
        assert_eq!(
            parse_location("lovb"),
            Route::league_tab(LeagueId::Lovb, DEFAULT_TAB)
        );
        assert_eq!(
            parse_location("lovb/schedule"),
            Route::league_tab(LeagueId::Lovb, TabId::Schedule)
        );
    }

    #[test]
    fn test_team_detail() {
        assert_eq!(
            parse_location("ncaa-men/team/123"),
            Route::team_detail(LeagueId::NcaaMen, "", "123")
        );
        assert_eq!(
            parse_location("#/ncaa-women//team//ncaa-women-12/"),
            Route::team_detail(LeagueId::NcaaWomen, "", "ncaa-women-12")
        );
    }

    #[test]
    fn test_path_and_hash_agree() {
        assert_eq!(
            parse_location("/pvf-pro/team/42"),
            parse_location("#/pvf-pro/team/42")
        );
    }

    #[test]
    fn test_team_marker_without_id_is_a_tab() {
        assert_eq!(
            parse_location("lovb/team"),
            Route::league_tab(LeagueId::Lovb, TabId::Other("team".to_string()))
        );
    }

    #[test]
    fn test_unknown_league_passthrough() {
        assert_eq!(
            parse_location("/klondike-volleyball/teams"),
            Route::league_tab(
                LeagueId::Unknown("Klondike Volleyball".to_string()),
                TabId::Teams
            )
        );
        // must not panic on odd dash runs
        let route = parse_location("/--klondike---volleyball--/");
        assert_eq!(
            route.league(),
            Some(&LeagueId::Unknown("Klondike Volleyball".to_string()))
        );
    }

    #[test]
    fn test_blank_segments_are_skipped() {
        assert_eq!(
            parse_location("/---/players"),
            Route::league_tab(LeagueId::Unknown("Players".to_string()), DEFAULT_TAB)
        );
        assert_eq!(
            parse_location("/%20/lovb/schedule"),
            Route::league_tab(LeagueId::Lovb, TabId::Schedule)
        );
        assert_eq!(
            parse_location("/lovb/%20"),
            Route::league_tab(LeagueId::Lovb, DEFAULT_TAB)
        );
        assert_eq!(
            parse_location("#/lovb/team/%20%20"),
            Route::league_tab(LeagueId::Lovb, TabId::Other("team".to_string()))
        );
        for raw in ["/---", "#/-/%20/", "/%20"] {
            assert_eq!(parse_location(raw), Route::Home, "input {:?}", raw);
        }
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            parse_location("#/lovb/team/Grand%20Rapids"),
            Route::team_detail(LeagueId::Lovb, "", "Grand Rapids")
        );
    }

    #[test]
    fn test_round_trip() {
        let mut routes = vec![Route::Home];
        let leagues = {
            let mut all = LeagueId::all();
            all.push(LeagueId::from_token("klondike-volleyball"));
            all
        };
        for league in &leagues {
            for tab in TabId::all() {
                routes.push(Route::league_tab(league.clone(), tab));
            }
            routes.push(Route::league_tab(
                league.clone(),
                TabId::from_id("roster"),
            ));
            routes.push(Route::team_detail(league.clone(), "Some Team", "123"));
            routes.push(Route::team_detail(league.clone(), "", "pvf-pro-3"));
            routes.push(Route::team_detail(league.clone(), "", "St. Mary's/CA"));
        }

        // parser output for odd inputs must survive serialization too
        for raw in ["/---/players", "/%20/players", "/lovb/%20", "/--/-/lovb/team/%20/x", "/-%20-/"] {
            routes.push(parse_location(raw));
        }

        for route in routes {
            assert_eq!(parse_location(&route.to_path()), route, "path {}", route.to_path());
            assert_eq!(parse_location(&route.to_hash()), route, "hash {}", route.to_hash());
        }
    }
}
