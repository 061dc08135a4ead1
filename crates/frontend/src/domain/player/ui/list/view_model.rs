use super::state::PlayersTabState;
use crate::shared::list_utils::{
    compare_optional, field_contains, filter_list, paginate, sort_list, Searchable, Sortable,
};
use contracts::domain::player::PlayerRecord;
use std::cmp::Ordering;
use std::collections::BTreeSet;

impl Searchable for PlayerRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(self.name.as_deref(), filter)
            || field_contains(self.position.as_deref(), filter)
            || field_contains(self.display_position().as_deref(), filter)
            || field_contains(Some(&self.display_team()), filter)
            || field_contains(self.hometown.as_deref(), filter)
    }
}

fn jersey_number(player: &PlayerRecord) -> Option<u32> {
    player.jersey.as_deref().and_then(|j| j.trim().parse().ok())
}

impl Sortable for PlayerRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "jersey" => match (jersey_number(self), jersey_number(other)) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            "position" => compare_optional(
                self.display_position().as_deref(),
                other.display_position().as_deref(),
            ),
            "team" => compare_optional(Some(&self.display_team()), Some(&other.display_team())),
            "class_year" => compare_optional(self.class_year.as_deref(), other.class_year.as_deref()),
            "height" => compare_optional(self.height.as_deref(), other.height.as_deref()),
            "hometown" => compare_optional(self.hometown.as_deref(), other.hometown.as_deref()),
            _ => compare_optional(self.name.as_deref(), other.name.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub key: String,
    pub name: String,
    pub jersey: String,
    pub position: String,
    pub team: String,
    pub class_year: String,
    pub height: String,
    pub hometown: String,
    pub profile_url: Option<String>,
}

impl PlayerRow {
    pub fn from_record(index: usize, player: &PlayerRecord) -> Self {
        Self {
            key: format!("{}:{}", index, player.display_name()),
            name: player.display_name().to_string(),
            jersey: player.jersey.clone().unwrap_or_default(),
            position: player.display_position().unwrap_or_default(),
            team: player.display_team(),
            class_year: player.class_year.clone().unwrap_or_default(),
            height: player.height.clone().unwrap_or_default(),
            hometown: player.hometown.clone().unwrap_or_default(),
            profile_url: player.profile_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayersViewModel {
    pub rows: Vec<PlayerRow>,
    pub positions: Vec<String>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub empty_message: Option<&'static str>,
}

pub fn players_view_model(state: &PlayersTabState, players: &[PlayerRecord]) -> PlayersViewModel {
    let positions: Vec<String> = players
        .iter()
        .filter_map(PlayerRecord::display_position)
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let by_position: Vec<PlayerRecord> = players
        .iter()
        .filter(|p| match &state.position {
            Some(position) => p.display_position().as_ref() == Some(position),
            None => true,
        })
        .cloned()
        .collect();
    let mut filtered = filter_list(by_position, &state.search);
    sort_list(&mut filtered, &state.sort_field, state.sort_ascending);
    let page = paginate(&filtered, state.page, state.page_size);
    let offset = page.page * state.page_size.max(1);

    let empty_message = if players.is_empty() {
        Some("No player data available for this league.")
    } else if filtered.is_empty() {
        Some("No players match your search criteria.")
    } else {
        None
    };

    PlayersViewModel {
        rows: page
            .items
            .iter()
            .enumerate()
            .map(|(i, p)| PlayerRow::from_record(offset + i, p))
            .collect(),
        positions,
        page: page.page,
        total_pages: page.total_pages,
        total_count: page.total_count,
        empty_message,
    }
}
