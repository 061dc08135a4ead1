use crate::shared::config::PLAYERS_PAGE_SIZE;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATE_KEY: &str = "players";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersTabState {
    pub search: String,
    pub position: Option<String>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for PlayersTabState {
    fn default() -> Self {
        Self {
            search: String::new(),
            position: None,
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: PLAYERS_PAGE_SIZE,
        }
    }
}

impl PlayersTabState {
    /// Same column flips the direction, a new column sorts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

pub fn create_state(initial: Option<PlayersTabState>) -> RwSignal<PlayersTabState> {
    RwSignal::new(initial.unwrap_or_default())
}
