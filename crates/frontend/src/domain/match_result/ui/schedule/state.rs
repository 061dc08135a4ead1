use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATE_KEY: &str = "schedule";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTabState {
    /// Team name with the league prefix stripped; `None` shows all matches
    pub team: Option<String>,
}

pub fn create_state(initial: Option<ScheduleTabState>) -> RwSignal<ScheduleTabState> {
    RwSignal::new(initial.unwrap_or_default())
}
