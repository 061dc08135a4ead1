use super::state::TeamsTabState;
use crate::shared::list_utils::{field_contains, filter_list, paginate, Searchable};
use contracts::domain::team::TeamRecord;
use std::collections::BTreeSet;

impl Searchable for TeamRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(Some(&self.name), filter) || field_contains(self.conference.as_deref(), filter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamCard {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamsViewModel {
    pub cards: Vec<TeamCard>,
    pub divisions: Vec<String>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub empty_message: Option<&'static str>,
}

fn subtitle(team: &TeamRecord) -> String {
    [team.conference.as_deref(), team.division.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

pub fn teams_view_model(state: &TeamsTabState, teams: &[TeamRecord], page_size: usize) -> TeamsViewModel {
    let divisions: Vec<String> = teams
        .iter()
        .filter_map(|t| t.division.clone())
        .filter(|d| !d.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let in_division: Vec<TeamRecord> = teams
        .iter()
        .filter(|t| match &state.division {
            Some(division) => t.division.as_ref() == Some(division),
            None => true,
        })
        .cloned()
        .collect();
    let filtered = filter_list(in_division, &state.search);
    let page = paginate(&filtered, state.page, page_size);

    let empty_message = if teams.is_empty() {
        Some("No teams available for this league yet.")
    } else if filtered.is_empty() {
        Some("No teams match your search.")
    } else {
        None
    };

    TeamsViewModel {
        cards: page
            .items
            .iter()
            .map(|team| TeamCard {
                id: team.id.clone(),
                name: team.name.clone(),
                subtitle: subtitle(team),
                image_ref: team.image_ref.clone(),
            })
            .collect(),
        divisions,
        page: page.page,
        total_pages: page.total_pages,
        total_count: page.total_count,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str, conference: &str, division: Option<&str>) -> TeamRecord {
        TeamRecord {
            id: id.into(),
            name: name.into(),
            conference: Some(conference.into()),
            division: division.map(Into::into),
            level: None,
            url: None,
            image_ref: None,
        }
    }

    fn sample() -> Vec<TeamRecord> {
        vec![
            team("1", "Nebraska", "Big Ten", Some("DI")),
            team("2", "Wisconsin", "Big Ten", Some("DI")),
            team("3", "Calvin", "MIAA", Some("DIII")),
            team("4", "Texas", "SEC", Some("DI")),
        ]
    }

    #[test]
    fn test_search_matches_name_or_conference() {
        let state = TeamsTabState {
            search: "big ten".into(),
            ..Default::default()
        };
        let vm = teams_view_model(&state, &sample(), 12);
        assert_eq!(vm.total_count, 2);
        assert_eq!(vm.cards[0].subtitle, "Big Ten · DI");

        let state = TeamsTabState {
            search: "TEX".into(),
            ..Default::default()
        };
        assert_eq!(teams_view_model(&state, &sample(), 12).cards[0].name, "Texas");
    }

    #[test]
    fn test_division_filter_and_options() {
        let state = TeamsTabState {
            division: Some("DIII".into()),
            ..Default::default()
        };
        let vm = teams_view_model(&state, &sample(), 12);
        assert_eq!(vm.divisions, vec!["DI".to_string(), "DIII".to_string()]);
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].id, "3");
    }

    #[test]
    fn test_pagination_and_empty_states() {
        let state = TeamsTabState {
            page: 5,
            ..Default::default()
        };
        let vm = teams_view_model(&state, &sample(), 3);
        assert_eq!((vm.page, vm.total_pages), (1, 2));
        assert_eq!(vm.cards.len(), 1);

        let none = TeamsTabState {
            search: "zzz".into(),
            ..Default::default()
        };
        assert_eq!(
            teams_view_model(&none, &sample(), 3).empty_message,
            Some("No teams match your search.")
        );
        assert_eq!(
            teams_view_model(&TeamsTabState::default(), &[], 3).empty_message,
            Some("No teams available for this league yet.")
        );
    }
}
