use crate::shared::data::LeagueStore;
use contracts::domain::team::TeamRecord;
use contracts::enums::LeagueId;
use leptos::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueStats {
    pub teams: usize,
    pub conferences: usize,
    pub divisions: Vec<String>,
}

pub fn league_stats(teams: &[TeamRecord]) -> LeagueStats {
    let distinct = |field: fn(&TeamRecord) -> Option<&String>| -> BTreeSet<String> {
        teams
            .iter()
            .filter_map(field)
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .collect()
    };
    LeagueStats {
        teams: teams.len(),
        conferences: distinct(|t| t.conference.as_ref()).len(),
        divisions: distinct(|t| t.division.as_ref()).into_iter().collect(),
    }
}

#[component]
pub fn LeagueOverview(league: LeagueId) -> impl IntoView {
    let store = use_context::<LeagueStore>().expect("LeagueStore context not found");
    let description = league.description();
    let stats = Memo::new(move |_| league_stats(&store.league_teams(&league)));

    view! {
        <div class="league-overview">
            <p class="league-overview__description">{description}</p>
            <div class="league-overview__stats">
                <div class="stat">
                    <span class="stat__value">{move || stats.get().teams}</span>
                    <span class="stat__label">"Teams"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{move || stats.get().conferences}</span>
                    <span class="stat__label">"Conferences"</span>
                </div>
            </div>
            <Show when=move || stats.with(|s| !s.divisions.is_empty())>
                <p class="league-overview__divisions">
                    "Divisions: " {move || stats.with(|s| s.divisions.join(", "))}
                </p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(conference: Option<&str>, division: Option<&str>) -> TeamRecord {
        TeamRecord {
            id: "t".into(),
            name: "T".into(),
            conference: conference.map(Into::into),
            division: division.map(Into::into),
            level: None,
            url: None,
            image_ref: None,
        }
    }

    #[test]
    fn test_league_stats_counts_distinct_values() {
        let teams = vec![
            team(Some("Big Ten"), Some("I")),
            team(Some("Big Ten"), Some("I")),
            team(Some("SEC"), Some("")),
            team(None, Some("II")),
        ];
        let stats = league_stats(&teams);
        assert_eq!(stats.teams, 4);
        assert_eq!(stats.conferences, 2);
        assert_eq!(stats.divisions, vec!["I".to_string(), "II".to_string()]);
    }

    #[test]
    fn test_league_stats_empty() {
        assert_eq!(
            league_stats(&[]),
            LeagueStats {
                teams: 0,
                conferences: 0,
                divisions: vec![],
            }
        );
    }
}
