use crate::shared::lenient::lenient_string;
use crate::shared::text::title_case;
use serde::{Deserialize, Serialize};

/// Player row as served by `/api/<league>_players`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub jersey: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hometown: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub conference: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub division: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub profile_url: Option<String>,
}

impl PlayerRecord {
    /// Coaching and operations staff share the roster endpoint
    pub fn is_staff(&self) -> bool {
        self.jersey.as_deref() == Some("Staff")
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown player")
    }

    pub fn display_position(&self) -> Option<String> {
        self.position.as_deref().map(normalize_position)
    }

    /// Team label; falls back to a title-cased `team_id` (`grand-rapids` -> `Grand Rapids`)
    pub fn display_team(&self) -> String {
        if let Some(team) = self.team.as_deref() {
            return team.to_string();
        }
        self.team_id
            .as_deref()
            .map(|id| title_case(id).replace("Lovb ", ""))
            .unwrap_or_default()
    }
}

/// Expand roster abbreviations into full position names.
pub fn normalize_position(position: &str) -> String {
    let expanded = match position.trim() {
        "L" | "Libero" => "Libero",
        "S" | "Setter" => "Setter",
        "Libero, Setter" => "Libero/Setter",
        "OH" | "Outside Hitter" => "Outside Hitter",
        "MB" | "MH" | "Middle Blocker" => "Middle Blocker",
        "OPP" | "Opposite Hitter" => "Opposite Hitter",
        "DS" => "Defensive Specialist",
        "L/DS" => "Libero/Defensive Specialist",
        "Director of Volleyball Operations/Technical Director" => "Technical Staff",
        other => other,
    };
    expanded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_position() {
        assert_eq!(normalize_position("OH"), "Outside Hitter");
        assert_eq!(normalize_position("MH"), "Middle Blocker");
        assert_eq!(normalize_position("L/DS"), "Libero/Defensive Specialist");
        assert_eq!(normalize_position("Head Coach"), "Head Coach");
    }

    #[test]
    fn test_decode_player() {
        let raw = r#"{"name": "Jane Doe", "jersey": 12, "position": "S", "team_id": "lovb-atlanta", "height": "NaN"}"#;
        let player: PlayerRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(player.jersey.as_deref(), Some("12"));
        assert_eq!(player.height, None);
        assert_eq!(player.display_position().as_deref(), Some("Setter"));
        assert_eq!(player.display_team(), "Atlanta");
        assert!(!player.is_staff());
    }

    #[test]
    fn test_staff_detection() {
        let staff = PlayerRecord {
            jersey: Some("Staff".to_string()),
            ..Default::default()
        };
        assert!(staff.is_staff());
    }
}
