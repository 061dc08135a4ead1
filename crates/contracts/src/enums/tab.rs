use crate::shared::text::capitalize;
use serde::{Deserialize, Serialize};

/// Tabs of the league overlay
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TabId {
    Overview,
    Teams,
    Players,
    Standings,
    Schedule,
    /// Unrecognized tab segment, kept verbatim so the overlay can show an empty state
    Other(String),
}

/// Tab shown when a league is entered without an explicit tab.
pub const DEFAULT_TAB: TabId = TabId::Teams;

impl TabId {
    /// Case-insensitive parse; never fails.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "overview" => TabId::Overview,
            "teams" => TabId::Teams,
            "players" => TabId::Players,
            "standings" => TabId::Standings,
            "schedule" => TabId::Schedule,
            _ => TabId::Other(id.trim().to_string()),
        }
    }

    /// URL segment
    pub fn id(&self) -> &str {
        match self {
            TabId::Overview => "overview",
            TabId::Teams => "teams",
            TabId::Players => "players",
            TabId::Standings => "standings",
            TabId::Schedule => "schedule",
            TabId::Other(id) => id,
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.id())
    }

    /// Tabs rendered in the overlay navigation, in order
    pub fn all() -> Vec<TabId> {
        vec![
            TabId::Overview,
            TabId::Teams,
            TabId::Players,
            TabId::Standings,
            TabId::Schedule,
        ]
    }
}

impl Default for TabId {
    fn default() -> Self {
        DEFAULT_TAB
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        TabId::from_id(&value)
    }
}

impl From<TabId> for String {
    fn from(value: TabId) -> Self {
        value.id().to_string()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(TabId::from_id("Schedule"), TabId::Schedule);
        assert_eq!(TabId::from_id("teams"), TabId::Teams);
        assert_eq!(TabId::from_id("roster"), TabId::Other("roster".to_string()));
    }

    #[test]
    fn test_label() {
        assert_eq!(TabId::Standings.label(), "Standings");
        assert_eq!(TabId::Other("roster".into()).label(), "Roster");
    }

    #[test]
    fn test_default_tab() {
        assert_eq!(TabId::default(), TabId::Teams);
    }
}
