use super::aggregate::TeamRecord;
use crate::shared::text::normalize_name;

/// Match strategies, tried in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    ExactId,
    ExactName,
    CaseInsensitiveName,
    NormalizedName,
}

impl MatchStrategy {
    pub const ORDER: [MatchStrategy; 4] = [
        MatchStrategy::ExactId,
        MatchStrategy::ExactName,
        MatchStrategy::CaseInsensitiveName,
        MatchStrategy::NormalizedName,
    ];

    fn matches(&self, query: &str, team: &TeamRecord) -> bool {
        match self {
            MatchStrategy::ExactId => team.id == query,
            MatchStrategy::ExactName => team.name == query,
            MatchStrategy::CaseInsensitiveName => team.name.to_lowercase() == query.to_lowercase(),
            MatchStrategy::NormalizedName => {
                let normalized = normalize_name(query);
                !normalized.is_empty() && normalize_name(&team.name) == normalized
            }
        }
    }
}

/// Locate a team by id or name. The first strategy with a hit wins.
pub fn find_team<'a>(query: &str, teams: &'a [TeamRecord]) -> Option<&'a TeamRecord> {
    find_team_with_strategy(query, teams).map(|(_, team)| team)
}

pub fn find_team_with_strategy<'a>(
    query: &str,
    teams: &'a [TeamRecord],
) -> Option<(MatchStrategy, &'a TeamRecord)> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    MatchStrategy::ORDER.iter().find_map(|strategy| {
        teams
            .iter()
            .find(|team| strategy.matches(query, team))
            .map(|team| (*strategy, team))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str) -> TeamRecord {
        TeamRecord {
            id: id.to_string(),
            name: name.to_string(),
            conference: None,
            division: None,
            level: None,
            url: None,
            image_ref: None,
        }
    }

    #[test]
    fn test_strategy_order() {
        let teams = vec![
            team("1", "Penn State"),
            team("Penn State", "Other"),
            team("3", "penn state"),
        ];
        // id beats name even though an earlier record matches by name
        let (strategy, hit) = find_team_with_strategy("Penn State", &teams).unwrap();
        assert_eq!(strategy, MatchStrategy::ExactId);
        assert_eq!(hit.name, "Other");
    }

    #[test]
    fn test_case_insensitive_then_normalized() {
        let teams = vec![team("1", "St. Mary's"), team("2", "UCLA")];
        assert_eq!(
            find_team_with_strategy("ucla", &teams).map(|(s, t)| (s, t.id.as_str())),
            Some((MatchStrategy::CaseInsensitiveName, "2"))
        );
        assert_eq!(
            find_team_with_strategy("st marys", &teams).map(|(s, t)| (s, t.id.as_str())),
            Some((MatchStrategy::NormalizedName, "1"))
        );
    }

    #[test]
    fn test_not_found() {
        let teams = vec![team("1", "UCLA")];
        assert!(find_team("42", &teams).is_none());
        assert!(find_team("  ", &teams).is_none());
        assert!(find_team("UCLA", &[]).is_none());
    }
}
