use crate::enums::LeagueId;
use crate::shared::lenient::lenient_string;
use crate::shared::text::sanitize_json_literals;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Raw dataset row
// ============================================================================

/// One row of `vbdb_teams.json` as published upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeamRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub division: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub conference: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: Option<String>,
}

impl RawTeamRow {
    /// League a raw row belongs to, or `None` when it cannot be categorized.
    ///
    /// Conference wins over level: LOVB and PVF teams carry their league in
    /// the conference column.
    pub fn league(&self) -> Option<LeagueId> {
        match self.conference.as_deref() {
            Some("LOVB") => return Some(LeagueId::Lovb),
            Some("PVF") => return Some(LeagueId::PvfPro),
            _ => {}
        }
        let level = self.level.as_deref()?;
        if level.contains("Women") {
            Some(LeagueId::NcaaWomen)
        } else if level.contains("Men") {
            Some(LeagueId::NcaaMen)
        } else {
            None
        }
    }
}

// ============================================================================
// Team record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub level: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "imageRef")]
    pub image_ref: Option<String>,
}

/// Teams grouped by league, in dataset order.
pub type TeamsByLeague = BTreeMap<LeagueId, Vec<TeamRecord>>;

/// Parse the raw teams dump (tolerating `NaN` literals) and bucket it by league.
pub fn decode_teams(raw: &str) -> Result<TeamsByLeague, serde_json::Error> {
    let rows: Vec<RawTeamRow> = serde_json::from_str(&sanitize_json_literals(raw))?;
    Ok(group_by_league(rows))
}

/// Rows without a name or a recognizable league are skipped.
///
/// The id is the upstream `team_id` when present, otherwise
/// `<league-slug>-<row index>`.
pub fn group_by_league(rows: Vec<RawTeamRow>) -> TeamsByLeague {
    let mut grouped: TeamsByLeague = LeagueId::all()
        .into_iter()
        .map(|league| (league, Vec::new()))
        .collect();

    for (index, row) in rows.into_iter().enumerate() {
        let Some(name) = row.name.clone() else {
            continue;
        };
        let Some(league) = row.league() else {
            continue;
        };
        let id = row
            .team_id
            .clone()
            .unwrap_or_else(|| format!("{}-{}", league.slug(), index));

        grouped.entry(league).or_default().push(TeamRecord {
            id,
            name,
            conference: row.conference,
            division: row.division,
            level: row.level,
            url: row.url,
            image_ref: row.img,
        });
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Nebraska", "level": "DI Women", "division": "DI", "conference": "Big Ten", "url": "https://huskers.com", "img": "neb.png"},
        {"name": "UCLA", "level": "DI Men", "division": NaN, "conference": "MPSF"},
        {"name": "Atlanta", "level": NaN, "conference": "LOVB", "team_id": 31.0},
        {"name": "Vegas Thrill", "level": "Pro", "conference": "PVF"},
        {"name": null, "level": "DI Women"},
        {"name": "Club X", "level": "Juniors"}
    ]"#;

    #[test]
    fn test_decode_teams_groups_by_league() {
        let grouped = decode_teams(SAMPLE).unwrap();
        assert_eq!(grouped[&LeagueId::NcaaWomen].len(), 1);
        assert_eq!(grouped[&LeagueId::NcaaMen].len(), 1);
        assert_eq!(grouped[&LeagueId::Lovb].len(), 1);
        assert_eq!(grouped[&LeagueId::PvfPro].len(), 1);
        assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), 4);
    }

    #[test]
    fn test_ids_and_cleaning() {
        let grouped = decode_teams(SAMPLE).unwrap();
        let nebraska = &grouped[&LeagueId::NcaaWomen][0];
        assert_eq!(nebraska.id, "ncaa-women-0");
        assert_eq!(nebraska.image_ref.as_deref(), Some("neb.png"));

        let ucla = &grouped[&LeagueId::NcaaMen][0];
        assert_eq!(ucla.division, None);

        let atlanta = &grouped[&LeagueId::Lovb][0];
        assert_eq!(atlanta.id, "31");

        let vegas = &grouped[&LeagueId::PvfPro][0];
        assert_eq!(vegas.id, "pvf-pro-3");
    }

    #[test]
    fn test_empty_dump_has_all_leagues() {
        let grouped = decode_teams("[]").unwrap();
        assert_eq!(grouped.len(), 4);
        assert!(grouped.values().all(Vec::is_empty));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(decode_teams("{not json").is_err());
    }
}
