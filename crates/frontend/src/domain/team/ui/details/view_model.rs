use crate::domain::player::ui::list::view_model::PlayerRow;
use crate::routes::panel::TeamPresentation;
use crate::shared::list_utils::sort_list;
use contracts::domain::player::PlayerRecord;
use contracts::enums::LeagueId;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamHeaderViewModel {
    pub title: String,
    pub league: String,
    pub image_ref: Option<String>,
    pub website: Option<String>,
    /// (label, value) pairs, empty values left out
    pub facts: Vec<(&'static str, String)>,
    pub found: bool,
}

pub fn team_header_view_model(league: &LeagueId, team: &TeamPresentation) -> TeamHeaderViewModel {
    match team {
        TeamPresentation::Found(record) => {
            let facts = [
                ("Conference", record.conference.clone()),
                ("Division", record.division.clone()),
                ("Level", record.level.clone()),
            ]
            .into_iter()
            .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
            .collect();

            TeamHeaderViewModel {
                title: record.name.clone(),
                league: league.to_string(),
                image_ref: record.image_ref.clone(),
                website: record.url.clone(),
                facts,
                found: true,
            }
        }
        TeamPresentation::NotFound {
            placeholder_name, ..
        } => TeamHeaderViewModel {
            title: placeholder_name.clone(),
            league: league.to_string(),
            image_ref: None,
            website: None,
            facts: Vec::new(),
            found: false,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSort {
    pub field: &'static str,
    pub ascending: bool,
}

impl Default for RosterSort {
    fn default() -> Self {
        Self {
            field: "name",
            ascending: true,
        }
    }
}

impl RosterSort {
    pub fn toggle(self, field: &'static str) -> Self {
        if self.field == field {
            Self {
                field,
                ascending: !self.ascending,
            }
        } else {
            Self {
                field,
                ascending: true,
            }
        }
    }
}

pub fn roster_rows(roster: &[PlayerRecord], sort: RosterSort) -> Vec<PlayerRow> {
    let mut sorted = roster.to_vec();
    sort_list(&mut sorted, sort.field, sort.ascending);
    sorted
        .iter()
        .enumerate()
        .map(|(i, p)| PlayerRow::from_record(i, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::team::TeamRecord;

    #[test]
    fn test_found_team_header() {
        let team = TeamPresentation::Found(TeamRecord {
            id: "ncaa-women-4".into(),
            name: "Nebraska".into(),
            conference: Some("Big Ten".into()),
            division: Some(String::new()),
            level: Some("DI Women".into()),
            url: Some("https://huskers.com".into()),
            image_ref: None,
        });
        let vm = team_header_view_model(&LeagueId::NcaaWomen, &team);
        assert!(vm.found);
        assert_eq!(vm.title, "Nebraska");
        assert_eq!(
            vm.facts,
            vec![("Conference", "Big Ten".to_string()), ("Level", "DI Women".to_string())]
        );
    }

    #[test]
    fn test_missing_team_header() {
        let team = TeamPresentation::from_lookup("42", None);
        let vm = team_header_view_model(&LeagueId::PvfPro, &team);
        assert!(!vm.found);
        assert_eq!(vm.title, "Team 42");
        assert_eq!(vm.league, "PVF Pro");
    }

    #[test]
    fn test_roster_sorting() {
        let roster = vec![
            PlayerRecord {
                name: Some("Zoe".into()),
                hometown: Some("Austin, TX".into()),
                ..Default::default()
            },
            PlayerRecord {
                name: Some("Ana".into()),
                ..Default::default()
            },
        ];
        let rows = roster_rows(&roster, RosterSort::default());
        assert_eq!(rows[0].name, "Ana");

        let by_hometown = RosterSort::default().toggle("hometown");
        assert_eq!(roster_rows(&roster, by_hometown)[0].name, "Zoe");
        assert!(!by_hometown.toggle("hometown").ascending);
    }
}
