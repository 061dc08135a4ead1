use crate::enums::LeagueId;
use crate::shared::lenient::lenient_string;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A played match as served by `/api/<league>_results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub home_team_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub away_team_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub home_team_img: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub away_team_img: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub match_url: Option<String>,
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

impl MatchResult {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        // drop fractional seconds / zone suffix
        let raw_dt = raw.split(['.', 'Z', '+']).next().unwrap_or(raw);
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw_dt, fmt).ok())
            .map(|dt| dt.date())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            })
    }

    /// `Mar 15, 2025`, or the raw string when it cannot be parsed
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => self.date.clone().unwrap_or_default(),
        }
    }

    pub fn home_team(&self, league: &LeagueId) -> String {
        strip_league_prefix(league, self.home_team_name.as_deref().unwrap_or_default())
    }

    pub fn away_team(&self, league: &LeagueId) -> String {
        strip_league_prefix(league, self.away_team_name.as_deref().unwrap_or_default())
    }

    pub fn involves(&self, league: &LeagueId, team: &str) -> bool {
        self.home_team(league) == team || self.away_team(league) == team
    }
}

/// Results name teams `LOVB Atlanta`; the league is already on screen.
pub fn strip_league_prefix(league: &LeagueId, name: &str) -> String {
    let prefix = format!("{} ", league.display_name());
    name.strip_prefix(&prefix).unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(date: &str, home: &str, away: &str) -> MatchResult {
        MatchResult {
            date: Some(date.to_string()),
            home_team_name: Some(home.to_string()),
            away_team_name: Some(away.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parsed_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 15);
        assert_eq!(result("2025-03-15", "", "").parsed_date(), expected);
        assert_eq!(result("2025-03-15T19:00:00.000Z", "", "").parsed_date(), expected);
        assert_eq!(result("03/15/2025", "", "").parsed_date(), expected);
        assert_eq!(result("March 15, 2025", "", "").parsed_date(), expected);
        assert_eq!(result("TBD", "", "").parsed_date(), None);
        assert_eq!(result("TBD", "", "").display_date(), "TBD");
        assert_eq!(result("2025-03-15", "", "").display_date(), "Mar 15, 2025");
    }

    #[test]
    fn test_strip_league_prefix() {
        let m = result("2025-01-01", "LOVB Atlanta", "LOVB Omaha");
        assert_eq!(m.home_team(&LeagueId::Lovb), "Atlanta");
        assert!(m.involves(&LeagueId::Lovb, "Omaha"));
        assert!(!m.involves(&LeagueId::Lovb, "Houston"));
        assert_eq!(m.home_team(&LeagueId::PvfPro), "LOVB Atlanta");
    }
}
