use super::state::ScheduleTabState;
use contracts::domain::match_result::MatchResult;
use contracts::enums::LeagueId;
use std::cmp::Reverse;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub key: String,
    pub date: String,
    pub home: String,
    pub away: String,
    pub home_img: Option<String>,
    pub away_img: Option<String>,
    pub score: String,
    pub location: Option<String>,
    pub match_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleViewModel {
    pub matches: Vec<MatchCard>,
    pub teams: Vec<String>,
    pub empty_message: Option<&'static str>,
}

/// Newest first; undated matches go last in source order.
pub fn schedule_view_model(
    state: &ScheduleTabState,
    league: &LeagueId,
    results: &[MatchResult],
) -> ScheduleViewModel {
    let teams: Vec<String> = results
        .iter()
        .flat_map(|m| [m.home_team(league), m.away_team(league)])
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut selected: Vec<(usize, &MatchResult)> = results
        .iter()
        .enumerate()
        .filter(|(_, m)| match &state.team {
            Some(team) => m.involves(league, team),
            None => true,
        })
        .collect();
    selected.sort_by_key(|(index, m)| (m.parsed_date().is_none(), Reverse(m.parsed_date()), *index));

    let empty_message = if results.is_empty() {
        Some("No results have been published yet.")
    } else if selected.is_empty() {
        Some("No matches found for this team.")
    } else {
        None
    };

    ScheduleViewModel {
        matches: selected
            .into_iter()
            .map(|(index, m)| MatchCard {
                key: index.to_string(),
                date: m.display_date(),
                home: m.home_team(league),
                away: m.away_team(league),
                home_img: m.home_team_img.clone(),
                away_img: m.away_team_img.clone(),
                score: m.score.clone().unwrap_or_else(|| "vs".to_string()),
                location: m.location.clone(),
                match_url: m.match_url.clone(),
            })
            .collect(),
        teams,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(date: Option<&str>, home: &str, away: &str, score: Option<&str>) -> MatchResult {
        MatchResult {
            date: date.map(Into::into),
            home_team_name: Some(home.into()),
            away_team_name: Some(away.into()),
            score: score.map(Into::into),
            ..Default::default()
        }
    }

    fn results() -> Vec<MatchResult> {
        vec![
            result(Some("2025-01-10"), "LOVB Austin", "LOVB Atlanta", Some("3-1")),
            result(None, "LOVB Houston", "LOVB Omaha", None),
            result(Some("2025-02-01"), "LOVB Omaha", "LOVB Austin", Some("2-3")),
        ]
    }

    #[test]
    fn test_newest_first_with_undated_last() {
        let vm = schedule_view_model(&ScheduleTabState::default(), &LeagueId::Lovb, &results());
        let keys: Vec<_> = vm.matches.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "0", "1"]);
        assert_eq!(vm.matches[0].date, "Feb 1, 2025");
        assert_eq!(vm.matches[2].score, "vs");
    }

    #[test]
    fn test_team_filter_on_stripped_names() {
        let vm = schedule_view_model(&ScheduleTabState::default(), &LeagueId::Lovb, &results());
        assert_eq!(vm.teams, vec!["Atlanta", "Austin", "Houston", "Omaha"]);

        let state = ScheduleTabState {
            team: Some("Austin".into()),
        };
        let vm = schedule_view_model(&state, &LeagueId::Lovb, &results());
        assert_eq!(vm.matches.len(), 2);
        assert_eq!(vm.matches[1].home, "Austin");

        let state = ScheduleTabState {
            team: Some("Madison".into()),
        };
        assert_eq!(
            schedule_view_model(&state, &LeagueId::Lovb, &results()).empty_message,
            Some("No matches found for this team.")
        );
    }
}
