use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Key under which the tab keeps its state in the overlay context
pub const STATE_KEY: &str = "teams";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsTabState {
    pub search: String,
    /// `None` shows every division
    pub division: Option<String>,
    pub page: usize,
}

pub fn create_state(initial: Option<TeamsTabState>) -> RwSignal<TeamsTabState> {
    RwSignal::new(initial.unwrap_or_default())
}
