use crate::shared::text::{slugify, title_case};
use serde::{Deserialize, Serialize};

/// Leagues covered by the database.
///
/// Every string that names a league (URL segment, dataset key, click payload)
/// goes through [`LeagueId::from_token`]. Anything that is not one of the four
/// known leagues is kept as `Unknown` with a title-cased display token, so
/// lookups against it simply find nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeagueId {
    NcaaWomen,
    NcaaMen,
    Lovb,
    PvfPro,
    Unknown(String),
}

impl LeagueId {
    /// Normalize any league-naming string.
    ///
    /// Dashes count as spaces and matching is case-insensitive, so
    /// `pvf-pro`, `PVF-PRO` and `pvf pro` are all `PvfPro`.
    pub fn from_token(token: &str) -> Self {
        let spaced = token.replace('-', " ");
        let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
        match collapsed.to_lowercase().as_str() {
            "ncaa women" => LeagueId::NcaaWomen,
            "ncaa men" => LeagueId::NcaaMen,
            "lovb" => LeagueId::Lovb,
            "pvf pro" => LeagueId::PvfPro,
            _ => LeagueId::Unknown(title_case(&collapsed)),
        }
    }

    /// Human readable name, also the key used by the team dataset
    pub fn display_name(&self) -> &str {
        match self {
            LeagueId::NcaaWomen => "NCAA Women",
            LeagueId::NcaaMen => "NCAA Men",
            LeagueId::Lovb => "LOVB",
            LeagueId::PvfPro => "PVF Pro",
            LeagueId::Unknown(token) => token,
        }
    }

    /// URL segment (`ncaa-women`, `pvf-pro`, ...)
    pub fn slug(&self) -> String {
        match self {
            LeagueId::NcaaWomen => "ncaa-women".to_string(),
            LeagueId::NcaaMen => "ncaa-men".to_string(),
            LeagueId::Lovb => "lovb".to_string(),
            LeagueId::PvfPro => "pvf-pro".to_string(),
            LeagueId::Unknown(token) => slugify(token),
        }
    }

    /// The four leagues shown on the home page, in display order
    pub fn all() -> Vec<LeagueId> {
        vec![
            LeagueId::NcaaWomen,
            LeagueId::NcaaMen,
            LeagueId::Lovb,
            LeagueId::PvfPro,
        ]
    }

    pub fn icon_ref(&self) -> Option<&'static str> {
        match self {
            LeagueId::NcaaWomen => Some(
                "https://www.ncaa.com/modules/custom/casablanca_core/img/sportbanners/volleyball-women.png",
            ),
            LeagueId::NcaaMen => Some(
                "https://www.ncaa.com/modules/custom/casablanca_core/img/sportbanners/volleyball-men.svg",
            ),
            LeagueId::Lovb => Some("assets/lovb.svg"),
            LeagueId::PvfPro => Some("https://provolleyball.com/dist/assets/logo.afbb3762.png"),
            LeagueId::Unknown(_) => None,
        }
    }

    /// API collection prefix (`ncaaw`, `ncaam`, `lovb`, `pvf`)
    pub fn api_prefix(&self) -> Option<&'static str> {
        match self {
            LeagueId::NcaaWomen => Some("ncaaw"),
            LeagueId::NcaaMen => Some("ncaam"),
            LeagueId::Lovb => Some("lovb"),
            LeagueId::PvfPro => Some("pvf"),
            LeagueId::Unknown(_) => None,
        }
    }

    /// Results are only published for the professional leagues and NCAA men.
    pub fn has_results(&self) -> bool {
        matches!(self, LeagueId::Lovb | LeagueId::PvfPro | LeagueId::NcaaMen)
    }

    pub fn description(&self) -> &'static str {
        match self {
            LeagueId::NcaaWomen => {
                "NCAA Women's Volleyball is one of the most competitive collegiate sports in the \
                 United States. The NCAA divides women's volleyball into three divisions, with \
                 Division I being the highest level of competition. The championship is held \
                 annually in December with a 64-team single-elimination tournament."
            }
            LeagueId::NcaaMen => {
                "NCAA Men's Volleyball has a smaller footprint than the women's game but features \
                 extremely high-level competition. The championship is a seven-team tournament \
                 held each May; UCLA, Long Beach State, Hawaii and Ohio State are traditional \
                 powerhouses."
            }
            LeagueId::Lovb => {
                "League One Volleyball (LOVB) is a professional women's league that combines \
                 national professional teams with local volleyball clubs, creating a development \
                 pathway from youth volleyball to the professional level."
            }
            LeagueId::PvfPro => {
                "The Professional Volleyball Federation (PVF) is a women's professional league \
                 that began play in January 2024, with teams such as the Orlando Valkyries, Vegas \
                 Thrill, Columbus Fury and San Diego Mojo."
            }
            LeagueId::Unknown(_) => "Information about this league will be coming soon.",
        }
    }
}

impl From<String> for LeagueId {
    fn from(value: String) -> Self {
        LeagueId::from_token(&value)
    }
}

impl From<LeagueId> for String {
    fn from(value: LeagueId) -> Self {
        value.display_name().to_string()
    }
}

impl std::fmt::Display for LeagueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
